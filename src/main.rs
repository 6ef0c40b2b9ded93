mod args;
mod components;

use color_eyre::eyre::{bail, Result};
use components::{Button, ButtonSize, ButtonVariant};
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

const QUALIA_CSS: Asset = asset!("/assets/qualia.css");

fn main() {
    let args = args::get_args();

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::default().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(args.title.clone())
                    .with_maximized(args.maximized),
            ),
        )
        .launch(App);
}

#[derive(Default)]
struct State {
    clicks: u32,
    name: String,
}

impl State {
    fn submit(&mut self) -> Result<String> {
        let name = std::mem::take(&mut self.name);
        if name.trim().is_empty() {
            bail!("Enter a name before submitting");
        }
        Ok(format!("Submitted {name:?}"))
    }
}

#[component]
fn App() -> Element {
    let mut state = use_signal(State::default);
    let mut status = use_signal(|| None);

    let oninput_name = move |event: FormEvent| state.write().name = event.value();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        match state.write().submit() {
            Ok(message) => status.set(Some(Ok(message))),
            Err(error) => status.set(Some(Err(error.to_string()))),
        };
    };

    let clicks = state.read().clicks;
    let name = state.read().name.clone();

    let status_message = status().map(|result: Result<String, String>| match result {
        Ok(message) => rsx!(p { class: "qualia-note", {message} }),
        Err(message) => rsx!(p { class: "qualia-note qualia-note--error", {message} }),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: QUALIA_CSS }
        main {
            class: "qualia-gallery",
            h1 { class: "qualia-gallery__title", "Qualia buttons" }

            Section {
                title: "Variants",
                Button { "Primary" }
                Button { variant: ButtonVariant::Secondary, "Secondary" }
                Button { variant: ButtonVariant::Ghost, "Ghost" }
                Button { variant: ButtonVariant::Danger, "Danger" }
            }

            Section {
                title: "Sizes",
                Button { size: ButtonSize::Sm, "Small" }
                Button { "Medium" }
                Button { size: ButtonSize::Lg, "Large" }
            }

            Section {
                title: "States",
                Button {
                    onclick: move |_| state.write().clicks += 1,
                    "Clicked {clicks} times"
                }
                Button {
                    disabled: true,
                    onclick: move |_| state.write().clicks += 1,
                    "Disabled"
                }
            }

            Section {
                title: "Full width",
                Button { variant: ButtonVariant::Secondary, full_width: true, "Stretch" }
            }

            Section {
                title: "Forwarded attributes",
                Button {
                    variant: ButtonVariant::Ghost,
                    id: "gallery-help",
                    title: "Lands on the native element untouched",
                    "Hover me"
                }
            }

            Section {
                title: "In a form",
                form {
                    class: "qualia-form",
                    onsubmit: onsubmit,
                    input {
                        class: "qualia-form__field",
                        placeholder: "Your name",
                        value: name,
                        oninput: oninput_name
                    }
                    Button { button_type: "submit", "Submit" }
                }
                {status_message}
            }
        }
    }
}

#[derive(PartialEq, Props, Clone)]
struct SectionProps {
    #[props(into)]
    title: String,
    children: Element,
}

#[component]
fn Section(props: SectionProps) -> Element {
    rsx! {
        section {
            class: "qualia-section",
            h2 { class: "qualia-section__title", {props.title} }
            div { class: "qualia-section__row", {props.children} }
        }
    }
}
