use leptos::*;

/// Font Awesome glyph reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon(&'static str);

impl Icon {
    pub const ENVELOPE: Icon = Icon("fa-envelope");
    pub const KEY: Icon = Icon("fa-key");
    pub const USERS: Icon = Icon("fa-users");
    pub const USER: Icon = Icon("fa-user");
    pub const USER_SHIELD: Icon = Icon("fa-user-shield");
    pub const PEN: Icon = Icon("fa-pen");
    pub const EYE: Icon = Icon("fa-eye");
    pub const EYE_SLASH: Icon = Icon("fa-eye-slash");

    pub const fn new(class_name: &'static str) -> Self {
        Icon(class_name)
    }

    pub fn class_name(&self) -> &'static str {
        self.0
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=format!("fas {} {}", icon.class_name(), class) aria-hidden="true"></i> }
}
