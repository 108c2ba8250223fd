//! Embedded template markup
//!
//! Templates are loaded from external files at compile time and embedded
//! directly in the binary.

/// Login form - loaded from templates/login_form_*.html
pub const LOGIN_FORM_BOOTSTRAP: &str = include_str!("../templates/login_form_bootstrap.html");
pub const LOGIN_FORM_TAILWIND: &str = include_str!("../templates/login_form_tailwind.html");
pub const LOGIN_FORM_PLAIN: &str = include_str!("../templates/login_form_plain.html");

/// Sign-up form - loaded from templates/signup_form_*.html
pub const SIGNUP_FORM_BOOTSTRAP: &str = include_str!("../templates/signup_form_bootstrap.html");
pub const SIGNUP_FORM_TAILWIND: &str = include_str!("../templates/signup_form_tailwind.html");
pub const SIGNUP_FORM_PLAIN: &str = include_str!("../templates/signup_form_plain.html");

/// Basic navbar - loaded from templates/basic_navbar_*.html
pub const BASIC_NAVBAR_BOOTSTRAP: &str = include_str!("../templates/basic_navbar_bootstrap.html");
pub const BASIC_NAVBAR_TAILWIND: &str = include_str!("../templates/basic_navbar_tailwind.html");
pub const BASIC_NAVBAR_PLAIN: &str = include_str!("../templates/basic_navbar_plain.html");
