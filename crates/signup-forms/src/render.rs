//! HTML rendering of the registration form and the success panel.
//!
//! Rendering is a pure function of the form state. Markup uses Bootstrap 5
//! classes.

use ironhtml::html;
use ironhtml::typed::{Document, Element};
use ironhtml_elements::{
    Body, Button, Div, Form, Head, Html, Input, Li, Link, Meta, Pre, Title, Ul, H2, H3, P,
};

use crate::error::Result;
use crate::field::Field;
use crate::registration::RegistrationForm;
use crate::state::SubmissionStatus;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

/// Renders one labelled input with its error text.
///
/// The error is shown only once the field has been touched.
pub fn render_field(form: &RegistrationForm, field: Field) -> String {
    let messages = form.messages();
    let id = field.as_str().to_string();
    let label_text = messages.label(field).to_string();
    let error = form.visible_error(field).map(str::to_string);
    let input_class = if error.is_some() {
        "form-control is-invalid"
    } else {
        "form-control"
    };

    let label_el = html! {
        label.for_(#id).class("form-label fw-semibold") { #label_text }
    };

    let mut div = Element::<Div>::new()
        .class("mb-3")
        .raw(label_el.render())
        .child::<Input, _>(|i| {
            i.attr("type", field.input_type())
                .id(field.as_str())
                .attr("name", field.as_str())
                .attr("placeholder", messages.placeholder(field))
                .attr("value", form.values().get(field))
                .class(input_class)
        });

    if let Some(error) = &error {
        div = div.child::<Div, _>(|d| d.class("invalid-feedback").text(error));
    }

    if field == Field::Password {
        div = div.raw(render_checklist(form));
    }

    div.render()
}

/// Renders the live password checklist.
pub fn render_checklist(form: &RegistrationForm) -> String {
    let items = form.checklist().items(form.messages());

    Element::<Ul>::new()
        .class("list-unstyled small text-muted mt-2 mb-0")
        .children(items, |(label, met), li: Element<Li>| {
            let text = format!("• {label}");
            let li = li.text(&text);
            if met {
                li.class("text-success")
            } else {
                li
            }
        })
        .render()
}

/// Renders the form view. The submit button is disabled while the form is
/// invalid.
pub fn render_form(form: &RegistrationForm) -> String {
    let valid = form.is_valid();
    let submit_text = &form.messages().title;

    let mut el = Element::<Form>::new()
        .attr("method", "post")
        .bool_attr("novalidate")
        .class("vstack gap-2");

    for field in Field::ALL {
        el = el.child::<Div, _>(|d| d.raw(render_field(form, field)));
    }

    el.child::<Button, _>(|b| {
        let b = b.attr("type", "submit").text(submit_text);
        if valid {
            b.class("btn btn-primary btn-lg w-100")
        } else {
            b.class("btn btn-secondary btn-lg w-100").bool_attr("disabled")
        }
    })
    .render()
}

/// Renders the success panel with the submitted values.
///
/// # Errors
///
/// Returns an error if the values cannot be serialized.
pub fn render_success(form: &RegistrationForm) -> Result<String> {
    let messages = form.messages();
    let welcome = messages.welcome_for(&form.values().username);
    let dump = serde_json::to_string_pretty(form.values())?;

    Ok(Element::<Div>::new()
        .class("alert alert-success text-center p-4")
        .child::<Div, _>(|d| d.class("display-4 text-success mb-3").text("✓"))
        .child::<H3, _>(|h| h.class("h5 fw-bold mb-2").text(&messages.success_title))
        .child::<P, _>(|p| p.class("small mb-3").text(&welcome))
        .child::<Pre, _>(|p| {
            p.class("small text-start bg-white border rounded p-3 mb-0")
                .text(&dump)
        })
        .child::<Button, _>(|b| {
            b.attr("type", "button")
                .attr("name", "action")
                .attr("value", "dismiss")
                .class("btn btn-success w-100 mt-4")
                .text(&messages.back_to_form)
        })
        .render())
}

/// Renders the form or the success panel, depending on the status.
///
/// # Errors
///
/// Returns an error if the success panel cannot be rendered.
pub fn render_view(form: &RegistrationForm) -> Result<String> {
    let body = match form.status() {
        SubmissionStatus::Idle => render_form(form),
        SubmissionStatus::Success => render_success(form)?,
    };
    let title = &form.messages().title;

    Ok(Element::<Div>::new()
        .class("card shadow mx-auto")
        .attr("style", "max-width: 28rem")
        .child::<Div, _>(|d| {
            d.class("card-body p-4")
                .child::<H2, _>(|h| h.class("h3 fw-bold text-center mb-4").text(title))
                .raw(&body)
        })
        .render())
}

/// Renders a complete HTML document around the current view.
///
/// # Errors
///
/// Returns an error if the view cannot be rendered.
pub fn render_page(form: &RegistrationForm) -> Result<String> {
    let view = render_view(form)?;
    let messages = form.messages();

    Ok(Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", messages.locale.as_str())
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(&messages.title))
                        .child::<Link, _>(|l| {
                            l.attr("href", BOOTSTRAP_CSS).attr("rel", "stylesheet")
                        })
                })
                .child::<Body, _>(|body| {
                    body.class("bg-light min-vh-100 d-flex align-items-center p-3")
                        .child::<Div, _>(|d| d.class("container").raw(&view))
                })
        })
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Messages;

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new().unwrap();
        form.change(Field::Username, "alice");
        form.change(Field::Email, "a@b.com");
        form.change(Field::Password, "Abcdefg1");
        form
    }

    #[test]
    fn test_initial_form() {
        let form = RegistrationForm::new().unwrap();
        let html = render_form(&form);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains("Enter your username"));
        assert!(html.contains("example@mail.com"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_form_contains_every_field() {
        let form = RegistrationForm::new().unwrap();
        let html = render_form(&form);
        let body = html
            .strip_prefix("<form")
            .and_then(|rest| rest.strip_suffix("</form>"))
            .unwrap();
        for field in Field::ALL {
            assert!(body.contains(&format!(r#"id="{field}""#)), "{field} input");
        }
        assert!(body.contains("Username") && body.contains("Password"));
        assert_eq!(body.matches("<input").count(), 3);
        assert!(body.find(r#"id="password""#).unwrap() < body.find("<button").unwrap());
    }

    #[test]
    fn test_touched_field_shows_error() {
        let mut form = RegistrationForm::new().unwrap();
        form.change(Field::Username, "ab");
        form.blur(Field::Username);

        let html = render_field(&form, Field::Username);
        assert!(html.contains("is-invalid"));
        assert!(html.contains("minimum 3 characters"));

        let html = render_form(&form);
        assert!(!html.contains("email required"));
        assert!(!html.contains("password required"));
    }

    #[test]
    fn test_submit_enabled_when_valid() {
        let html = render_form(&valid_form());
        assert!(!html.contains("disabled"));
        assert!(html.contains("btn-primary"));
    }

    #[test]
    fn test_checklist_marks_met_items() {
        let mut form = RegistrationForm::new().unwrap();
        form.change(Field::Password, "abcdefg1");
        let html = render_checklist(&form);
        assert_eq!(html.matches("text-success").count(), 2);
        assert!(html.contains("At least 8 characters"));
        assert!(html.contains("One uppercase letter"));
        assert!(html.contains("One digit"));
    }

    #[test]
    fn test_password_field_has_checklist() {
        let form = RegistrationForm::new().unwrap();
        assert!(render_field(&form, Field::Password).contains("One digit"));
        assert!(!render_field(&form, Field::Email).contains("One digit"));
    }

    #[test]
    fn test_success_panel() {
        let mut form = valid_form();
        form.submit();
        let html = render_view(&form).unwrap();
        assert!(html.contains("Registration successful!"));
        assert!(html.contains("Welcome, alice"));
        assert!(html.contains("a@b.com"));
        assert!(html.contains("Back to sign up"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_view_shows_form_when_idle() {
        let form = RegistrationForm::new().unwrap();
        let html = render_view(&form).unwrap();
        assert!(html.contains("<form"));
        assert!(!html.contains("Registration successful!"));
    }

    #[test]
    fn test_page_document() {
        let form = RegistrationForm::with_messages(Messages::thai()).unwrap();
        let html = render_page(&form).unwrap();
        assert!(html.to_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains(r#"lang="th""#));
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.contains("สมัครสมาชิก"));
    }
}
