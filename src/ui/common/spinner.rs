use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Circular loading indicator
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
    /// Whether to center the spinner in its container
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=format!("spinner spinner-circle {}", size.class()) role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Centered page placeholder shown while data loads
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Large label=message centered=true />
    }
}
