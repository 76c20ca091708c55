use super::*;

const FIELDS: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

/// Browser-native constraint validation for this form: every field is
/// `required` and the email input is `type="email"`.
fn passes_native_validation(form: &ContactForm) -> bool {
    let email_ok = form
        .email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    !form.name.is_empty() && !form.message.is_empty() && email_ok
}

/// Feed every prefix of `text` into `field`, like keystrokes do.
fn type_into(state: ContactFormState, field: ContactField, text: &str) -> ContactFormState {
    text.char_indices()
        .map(|(i, c)| &text[..i + c.len_utf8()])
        .fold(state, |s, prefix| s.with_field(field, prefix))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn contact_state_default_is_empty_and_unsubmitted() {
    let state = ContactFormState::default();
    assert_eq!(state.form, ContactForm::default());
    assert!(!state.submitted);
    assert_eq!(state.view(), ContactView::Form);
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn with_field_replaces_only_target_field() {
    let form = ContactForm { name: "a".into(), email: "b".into(), message: "c".into() };
    let next = form.with_field(ContactField::Email, "x@y.z");
    assert_eq!(next, ContactForm { name: "a".into(), email: "x@y.z".into(), message: "c".into() });
    assert_eq!(form.email, "b");
}

#[test]
fn get_reads_each_field() {
    let form = ContactForm { name: "n".into(), email: "e".into(), message: "m".into() };
    assert_eq!(form.get(ContactField::Name), "n");
    assert_eq!(form.get(ContactField::Email), "e");
    assert_eq!(form.get(ContactField::Message), "m");
}

#[test]
fn final_state_holds_last_value_per_field_in_any_order() {
    let orders: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    let values = ["Jane", "jane@x.com", "Hi there"];
    for order in orders {
        let mut state = ContactFormState::default();
        for &i in &order {
            state = type_into(state, FIELDS[i], "draft");
        }
        for &i in order.iter().rev() {
            state = type_into(state, FIELDS[i], values[i]);
        }
        assert_eq!(state.form.name, "Jane", "order {order:?}");
        assert_eq!(state.form.email, "jane@x.com", "order {order:?}");
        assert_eq!(state.form.message, "Hi there", "order {order:?}");
    }
}

#[test]
fn interleaved_edits_do_not_leak_between_fields() {
    let state = ContactFormState::default()
        .with_field(ContactField::Name, "J")
        .with_field(ContactField::Message, "H")
        .with_field(ContactField::Name, "Ja")
        .with_field(ContactField::Email, "j@")
        .with_field(ContactField::Message, "Hi")
        .with_field(ContactField::Email, "j@x.com");
    assert_eq!(state.form, ContactForm { name: "Ja".into(), email: "j@x.com".into(), message: "Hi".into() });
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_transitions_to_confirmation_once() {
    let state = ContactFormState::default()
        .with_field(ContactField::Name, "Jane")
        .with_field(ContactField::Email, "jane@x.com")
        .with_field(ContactField::Message, "Hi");
    assert!(passes_native_validation(&state.form));

    let submitted = state.submit();
    assert!(submitted.submitted);
    assert_eq!(submitted.view(), ContactView::Confirmation);

    let again = submitted.submit();
    assert_eq!(again, submitted);
}

#[test]
fn edits_after_submit_are_ignored() {
    let state = ContactFormState::default().with_field(ContactField::Name, "Jane").submit();
    let edited = state.with_field(ContactField::Name, "Someone else");
    assert_eq!(edited, state);
}

#[test]
fn exactly_one_view_at_a_time() {
    let before = ContactFormState::default();
    let after = before.submit();
    assert_eq!(before.view(), ContactView::Form);
    assert_eq!(after.view(), ContactView::Confirmation);
    assert_ne!(before.view(), after.view());
}

#[test]
fn native_validation_model_rejects_incomplete_forms() {
    let base = ContactForm { name: "Jane".into(), email: "jane@x.com".into(), message: "Hi".into() };
    assert!(passes_native_validation(&base));
    assert!(!passes_native_validation(&base.with_field(ContactField::Name, "")));
    assert!(!passes_native_validation(&base.with_field(ContactField::Message, "")));
    assert!(!passes_native_validation(&base.with_field(ContactField::Email, "jane")));
    assert!(!passes_native_validation(&base.with_field(ContactField::Email, "@x.com")));
}

// =============================================================
// Walkthrough
// =============================================================

#[test]
fn jane_walkthrough() {
    let state = ContactFormState::default();
    assert_eq!(state, ContactFormState { form: ContactForm::default(), submitted: false });

    let state = type_into(state, ContactField::Name, "Jane");
    assert_eq!(
        state,
        ContactFormState {
            form: ContactForm { name: "Jane".into(), email: String::new(), message: String::new() },
            submitted: false,
        }
    );

    let state = type_into(state, ContactField::Email, "jane@x.com");
    let state = type_into(state, ContactField::Message, "Hi");
    let state = state.submit();
    assert_eq!(
        state,
        ContactFormState {
            form: ContactForm { name: "Jane".into(), email: "jane@x.com".into(), message: "Hi".into() },
            submitted: true,
        }
    );
    assert_eq!(state.view(), ContactView::Confirmation);
}

#[test]
fn form_name_matches_capture_integration() {
    assert_eq!(FORM_NAME, "contact");
}
