//! Message template rendering
//!
//! Failure messages come from format templates with two positional slots:
//! `{0}` is replaced with the rule's group name, `{1}` with a rule-specific
//! parameter (a minimum length, a size bound). Templates are rendered on
//! demand, never stored pre-rendered, so a message always reflects the
//! rule's current configuration.

use std::fmt::Display;

/// Renders a message template against a group name and an optional
/// rule-specific parameter.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::render_template;
///
/// let message = render_template(
///     "{0} requires at least {1} characters",
///     "username",
///     Some(&3),
/// );
/// assert_eq!(message, "username requires at least 3 characters");
/// ```
#[must_use]
pub fn render_template(template: &str, group_name: &str, param: Option<&dyn Display>) -> String {
    let rendered = template.replace("{0}", group_name);
    match param {
        Some(param) => rendered.replace("{1}", &param.to_string()),
        None => rendered,
    }
}
