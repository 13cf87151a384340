use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the app
pub mod icons {
    pub const PLUS: &str = "plus";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const PAPERCLIP: &str = "paperclip";
    pub const UPLOAD: &str = "upload";
    pub const DOWNLOAD: &str = "download";
    pub const REFRESH: &str = "refresh";
    pub const LOGOUT: &str = "logout";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
}
