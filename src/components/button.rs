use dioxus::prelude::*;
use itertools::Itertools;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "qualia-btn--primary",
            Self::Secondary => "qualia-btn--secondary",
            Self::Ghost => "qualia-btn--ghost",
            Self::Danger => "qualia-btn--danger",
        }
    }
}

/// Sizing of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "qualia-btn--sm",
            Self::Md => "qualia-btn--md",
            Self::Lg => "qualia-btn--lg",
        }
    }
}

#[derive(PartialEq, Props, Clone)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch the button to the width of its container.
    #[props(default = false)]
    pub full_width: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// The native `type` attribute (button, submit, reset).
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Extra classes, appended after every generated class.
    #[props(default)]
    pub class: String,
    /// Remaining attributes, forwarded verbatim onto the element.
    #[props(extends = GlobalAttributes, extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Styled button. Maps its style props onto the `qualia-btn` class family
/// and renders a native `<button>`; the stylesheet owns the visual rules.
///
/// A disabled button keeps its `onclick` wired but the native element never
/// emits the event.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class =
        button_class(props.variant, props.size, props.full_width, props.disabled, &props.class);

    rsx! {
        button {
            type: props.button_type,
            class: class,
            disabled: props.disabled,
            onclick: move |event| {
                if let Some(handler) = &props.onclick {
                    handler.call(event);
                }
            },
            ..props.attributes,
            {props.children}
        }
    }
}

/// Joins the base class, modifier classes, and the caller's extra classes
/// with single spaces, skipping empty segments.
fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
    extra: &str,
) -> String {
    [
        "qualia-btn",
        variant.class(),
        size.class(),
        if full_width { "qualia-btn--full" } else { "" },
        if disabled { "qualia-btn--disabled" } else { "" },
        extra,
    ]
    .into_iter()
    .filter(|segment| !segment.is_empty())
    .join(" ")
}
