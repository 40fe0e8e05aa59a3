use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

fn current_label<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "select__option select__option--selected"
    } else {
        "select__option"
    }
}

/// Styled dropdown. A transparent backdrop catches clicks outside the menu.
#[component]
pub fn Select(
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
    #[props(default)] name: Option<String>,
    #[props(default = "Select…".to_string())] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    let mut open = use_signal(|| false);
    let menu_id = name.as_ref().map(|n| format!("{n}-menu"));

    let label = current_label(&options, &value).map(str::to_string);
    let root_class = format!(
        "select{}{}",
        if open() { " select--open" } else { "" },
        if disabled { " select--disabled" } else { "" }
    );

    let on_keydown = move |evt: KeyboardEvent| {
        if disabled {
            return;
        }
        match evt.key() {
            Key::Enter | Key::ArrowDown => {
                evt.prevent_default();
                open.set(true);
            }
            Key::Character(c) if c == " " => {
                evt.prevent_default();
                open.set(true);
            }
            Key::Escape => open.set(false),
            _ => {}
        }
    };

    rsx! {
        div { class: "{root_class}",
            button {
                r#type: "button",
                class: "select__control",
                aria_haspopup: "listbox",
                aria_expanded: "{open()}",
                aria_controls: menu_id.clone(),
                disabled,
                onclick: move |_| {
                    if !disabled {
                        open.set(!open());
                    }
                },
                onkeydown: on_keydown,
                if let Some(label) = label {
                    span { class: "select__value", "{label}" }
                } else {
                    span { class: "select__value select__value--placeholder", "{placeholder}" }
                }
                span { class: "select__arrow", "▾" }
            }
            if open() {
                div { class: "select__backdrop", onclick: move |_| open.set(false) }
                ul { role: "listbox", id: menu_id.clone(), class: "select__menu",
                    for opt in options.iter().cloned() {
                        li {
                            key: "{opt.value}",
                            role: "option",
                            aria_selected: opt.value == value,
                            class: option_class(opt.value == value),
                            onclick: {
                                let picked = opt.value.clone();
                                move |_| {
                                    onchange.call(picked.clone());
                                    open.set(false);
                                }
                            },
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}
