use crate::components::{
    error::{error_element_id, FieldErrorMessage},
    icons::{Icon, IconGlyph},
};
use leptos::*;

pub const NO_OPTIONS_VALUE: &str = "no-options";
pub const NO_OPTIONS_LABEL: &str = "No options available";
pub const DEFAULT_SELECT_PLACEHOLDER: &str = "Select an option";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Search => "search",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
        }
    }
}

/// Type attribute actually rendered. Only password inputs react to the
/// visibility toggle.
pub fn effective_input_kind(kind: InputKind, password_visible: bool) -> InputKind {
    match kind {
        InputKind::Password if password_visible => InputKind::Text,
        other => other,
    }
}

fn label_classes(disabled: bool, has_error: bool) -> String {
    let mut classes = String::from("text-sm font-medium leading-none text-fg");
    if disabled {
        classes.push_str(" cursor-not-allowed opacity-70");
    }
    if has_error {
        classes.push_str(" text-status-error-text");
    }
    classes
}

fn input_classes(has_left_icon: bool, has_trailing: bool, has_error: bool, extra: &str) -> String {
    let mut classes = String::from(
        "h-10 w-full rounded-md border border-form-control-border bg-form-control-bg py-2 text-sm text-form-control-text placeholder:text-form-control-placeholder focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-action-primary-focus disabled:cursor-not-allowed disabled:opacity-50",
    );
    classes.push_str(if has_left_icon { " pl-10" } else { " pl-3" });
    classes.push_str(if has_trailing { " pr-10" } else { " pr-3" });
    if has_error {
        classes.push_str(" border-status-error-border text-status-error-text focus-visible:ring-status-error-border");
    }
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional)] kind: InputKind,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] left_icon: Option<Icon>,
    #[prop(optional)] right_icon: Option<Icon>,
    #[prop(optional, into)] on_right_icon_click: Option<Callback<()>>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] container_class: String,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let (password_visible, set_password_visible) = create_signal(false);
    let error = create_memo(move |_| error.get());
    let has_error = move || error.with(|e| e.is_some());
    let is_password = kind == InputKind::Password;
    let has_trailing = is_password || right_icon.is_some();
    let described_by = error_element_id(&id);

    let trailing = if is_password {
        let controls = id.clone();
        view! {
            <button
                type="button"
                class="absolute right-3 p-1 text-fg-muted hover:text-fg focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-action-primary-focus rounded-sm transition-colors"
                aria-label=move || if password_visible.get() { "Hide password" } else { "Show password" }
                aria-controls=controls
                on:click=move |_| set_password_visible.update(|visible| *visible = !*visible)
            >
                {move || {
                    let icon = if password_visible.get() { Icon::EYE_SLASH } else { Icon::EYE };
                    view! { <IconGlyph icon=icon class="h-5 w-5" /> }
                }}
            </button>
        }
        .into_view()
    } else if let Some(icon) = right_icon {
        let interactive = on_right_icon_click.is_some();
        let controls = id.clone();
        view! {
            <button
                type="button"
                class=format!(
                    "absolute right-3 p-1 text-fg-muted hover:text-fg focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-action-primary-focus rounded-sm transition-colors {}",
                    if interactive { "" } else { "pointer-events-none" }
                )
                aria-label=interactive.then_some("Right icon action")
                aria-controls=controls
                disabled=move || !interactive || disabled.get()
                on:click=move |_| {
                    if let Some(callback) = on_right_icon_click {
                        callback.call(());
                    }
                }
            >
                <IconGlyph icon=icon class="h-5 w-5" />
            </button>
        }
        .into_view()
    } else {
        ().into_view()
    };

    view! {
        <div class=format!("flex flex-col space-y-1.5 w-full {}", container_class)>
            <label for=id.clone() class=move || label_classes(disabled.get(), has_error())>
                {label}
            </label>
            <div class="relative flex items-center">
                {left_icon
                    .map(|icon| {
                        view! {
                            <IconGlyph
                                icon=icon
                                class="absolute left-3 h-5 w-5 text-fg-muted pointer-events-none"
                            />
                        }
                    })}
                <input
                    id=id.clone()
                    type=move || effective_input_kind(kind, password_visible.get()).as_str()
                    class=move || input_classes(left_icon.is_some(), has_trailing, has_error(), &class)
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                    aria-invalid=move || if has_error() { "true" } else { "false" }
                    aria-describedby=move || has_error().then(|| described_by.clone())
                    {..attributes}
                />
                {trailing}
            </div>
            <FieldErrorMessage field_id=id error=error />
        </div>
    }
}

/// Entry of a static option catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Option<Icon>,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            icon: None,
        }
    }

    pub const fn with_icon(self, icon: Icon) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }
}

/// Value to emit for a raw `<select>` change, if it names a catalog entry.
pub fn selectable_value(options: &[SelectOption], raw: &str) -> Option<String> {
    if raw == NO_OPTIONS_VALUE {
        return None;
    }
    options
        .iter()
        .find(|option| option.value == raw)
        .map(|option| option.value.to_string())
}

pub fn selected_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.value == value)
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    options: &'static [SelectOption],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] trigger_left_icon: Option<Icon>,
    #[prop(optional, into)] group_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let error = create_memo(move |_| error.get());
    let has_error = move || error.with(|e| e.is_some());
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_SELECT_PLACEHOLDER.to_string());
    let described_by = error_element_id(&id);
    let leading_icon = move || {
        value
            .with(|current| selected_option(options, current).and_then(|option| option.icon))
            .or(trigger_left_icon)
    };
    let has_leading = trigger_left_icon.is_some() || options.iter().any(|o| o.icon.is_some());

    let items = if options.is_empty() {
        view! {
            <option value=NO_OPTIONS_VALUE disabled=true class="text-fg-muted">
                {NO_OPTIONS_LABEL}
            </option>
        }
        .into_view()
    } else {
        options
            .iter()
            .map(|option| {
                view! {
                    <option
                        value=option.value
                        selected=move || value.with(|current| current == option.value)
                    >
                        {option.label}
                    </option>
                }
            })
            .collect_view()
    };
    let items = match group_label {
        Some(group) => view! { <optgroup label=group>{items}</optgroup> }.into_view(),
        None => items,
    };

    view! {
        <div class=format!("flex flex-col space-y-1.5 w-full {}", class)>
            <label for=id.clone() class=move || label_classes(disabled.get(), has_error())>
                {label}
            </label>
            <div class="relative flex items-center">
                {move || {
                    leading_icon()
                        .map(|icon| {
                            view! {
                                <IconGlyph
                                    icon=icon
                                    class="absolute left-3 h-5 w-5 text-fg-muted pointer-events-none"
                                />
                            }
                        })
                }}
                <select
                    id=id.clone()
                    class=move || {
                        format!(
                            "{} appearance-none {}",
                            input_classes(has_leading, true, has_error(), ""),
                            if value.with(|v| v.is_empty()) { "text-form-control-placeholder" } else { "" },
                        )
                    }
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:change=move |ev| {
                        if let Some(selected) = selectable_value(options, &event_target_value(&ev)) {
                            on_change.call(selected);
                        }
                    }
                    aria-invalid=move || if has_error() { "true" } else { "false" }
                    aria-describedby=move || has_error().then(|| described_by.clone())
                >
                    <option
                        value=""
                        disabled=true
                        hidden=true
                        selected=move || value.with(|v| v.is_empty())
                    >
                        {placeholder}
                    </option>
                    {items}
                </select>
                <IconGlyph
                    icon=Icon::new("fa-chevron-down")
                    class="absolute right-3 h-4 w-4 text-fg-muted pointer-events-none"
                />
            </div>
            <FieldErrorMessage field_id=id error=error />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[SelectOption] = &[
        SelectOption::new("user", "User"),
        SelectOption::new("admin", "Administrator").with_icon(Icon::USER_SHIELD),
    ];

    #[test]
    fn password_toggle_flips_rendered_kind() {
        let hidden = effective_input_kind(InputKind::Password, false);
        let shown = effective_input_kind(InputKind::Password, true);
        assert_eq!(hidden, InputKind::Password);
        assert_eq!(shown, InputKind::Text);
        assert_eq!(shown.as_str(), "text");
    }

    #[test]
    fn toggle_does_not_affect_other_kinds() {
        assert_eq!(effective_input_kind(InputKind::Email, true), InputKind::Email);
        assert_eq!(effective_input_kind(InputKind::Url, false).as_str(), "url");
    }

    #[test]
    fn selectable_value_only_accepts_catalog_entries() {
        assert_eq!(selectable_value(ROLES, "admin"), Some("admin".to_string()));
        assert_eq!(selectable_value(ROLES, "root"), None);
        assert_eq!(selectable_value(ROLES, ""), None);
        assert_eq!(selectable_value(&[], NO_OPTIONS_VALUE), None);
    }

    #[test]
    fn selected_option_exposes_icon() {
        let option = selected_option(ROLES, "admin").expect("admin option");
        assert_eq!(option.icon, Some(Icon::USER_SHIELD));
        assert!(selected_option(ROLES, "").is_none());
    }

    #[test]
    fn input_classes_reserve_room_for_icons() {
        let classes = input_classes(true, true, false, "");
        assert!(classes.contains("pl-10"));
        assert!(classes.contains("pr-10"));
        let classes = input_classes(false, false, true, "mt-2");
        assert!(classes.contains("pl-3"));
        assert!(classes.contains("border-status-error-border"));
        assert!(classes.ends_with("mt-2"));
    }

    #[test]
    fn label_classes_reflect_state() {
        assert!(label_classes(true, false).contains("opacity-70"));
        assert!(label_classes(false, true).contains("text-status-error-text"));
    }
}
