use askama::Template;

/// Self-submitting page that forwards a deep form as a single hidden field
#[derive(Template)]
#[template(path = "relay.html")]
pub struct RelayTemplate<'a> {
    pub attributes: &'a [(String, String)],
    pub field_name: &'a str,
    pub payload: &'a str,
}

/// Sample form whose field names use deep keys
#[derive(Template)]
#[template(path = "demo_form.html")]
pub struct DemoFormTemplate<'a> {
    pub action: &'a str,
    pub field_name: &'a str,
}

/// Bare page carrying one status message
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate<'a> {
    pub message: &'a str,
}
