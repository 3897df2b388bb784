#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://127.0.0.1:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: same origin, reverse-proxied
}

/// Address the contact form falls back to when the API is unreachable.
pub const CONTACT_EMAIL: &str = "hello@intasolutions.in";

/// Number behind the floating WhatsApp button, international format without '+'.
pub const WHATSAPP_NUMBER: &str = "919895501234";
