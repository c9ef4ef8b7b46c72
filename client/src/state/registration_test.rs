use super::*;
use registration::RegistrationForm;

fn fill_valid(form: &mut RegistrationForm, ui: &mut RegistrationUi) {
    form.input(Field::Username, "valid_user1", ui);
    form.input(Field::Email, "user@example.com", ui);
    form.input(Field::Password, "Abc12345!", ui);
    form.input(Field::ConfirmPassword, "Abc12345!", ui);
}

#[test]
fn invalid_input_shows_error_and_queues_shake() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();

    form.input(Field::Username, "ab", &mut ui);

    assert_eq!(ui.field(Field::Username).error.as_deref(), Some("Username must be at least 3 characters long"));
    assert!(!ui.field(Field::Username).indicator);
    assert!(ui.is_shaking(ShakeTarget::Field(Field::Username)));
    let expiries = ui.take_expiries();
    assert_eq!(expiries.len(), 1);
    assert_eq!(expiries[0].duration(), SHAKE_DURATION);
    assert!(ui.take_expiries().is_empty());
}

#[test]
fn valid_input_replaces_error_with_single_indicator() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    form.input(Field::Username, "ab", &mut ui);

    form.input(Field::Username, "valid_user1", &mut ui);
    form.input(Field::Username, "valid_user2", &mut ui);

    assert_eq!(ui.field(Field::Username), FieldUi { error: None, indicator: true });
}

#[test]
fn invalid_input_drops_indicator() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    form.input(Field::Email, "user@example.com", &mut ui);

    form.input(Field::Email, "nope", &mut ui);

    assert!(!ui.field(Field::Email).indicator);
}

#[test]
fn shake_clears_only_for_latest_timer() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    form.input(Field::Username, "a", &mut ui);
    let first = ui.take_expiries()[0];
    form.input(Field::Username, "ab", &mut ui);
    let second = ui.take_expiries()[0];

    ui.expire(first);
    assert!(ui.is_shaking(ShakeTarget::Field(Field::Username)), "restarted shake survives the older timer");
    ui.expire(second);
    assert!(!ui.is_shaking(ShakeTarget::Field(Field::Username)));
}

#[test]
fn strength_meter_follows_password() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    assert_eq!(ui.strength(), None);

    form.input(Field::Password, "abcdefgh", &mut ui);
    assert_eq!(ui.strength(), Some(Strength::Weak));
    form.input(Field::Password, "Abc12345!", &mut ui);
    assert_eq!(ui.strength(), Some(Strength::Strong));
}

#[test]
fn rejected_submit_shakes_submit_control() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();

    form.begin_submit(&mut ui);

    assert!(ui.is_shaking(ShakeTarget::Submit));
    assert!(!ui.is_submitting());
}

#[test]
fn submit_disables_control_until_result() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    fill_valid(&mut form, &mut ui);

    form.begin_submit(&mut ui);
    assert!(ui.is_submitting());

    form.finish_submit(Ok(()), &mut ui);
    assert!(!ui.is_submitting());
    assert!(ui.is_registered());
}

#[test]
fn failure_shows_notice_until_it_expires() {
    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    fill_valid(&mut form, &mut ui);
    ui.take_expiries();

    form.begin_submit(&mut ui);
    form.finish_submit(Err(registration::SubmissionError::Transport("offline".to_owned())), &mut ui);

    assert!(!ui.is_submitting());
    assert!(!ui.is_registered());
    assert_eq!(ui.notice(), Some("Registration failed. Please try again."));
    let expiries = ui.take_expiries();
    assert_eq!(expiries.len(), 1);
    assert_eq!(expiries[0].duration(), NOTICE_DURATION);

    ui.expire(expiries[0]);
    assert_eq!(ui.notice(), None);
}

#[test]
fn emitter_submit_without_backend_shows_failure_notice() {
    use futures::executor::block_on;

    let (emitter, events) = registration::events::channel();
    emitter.input(Field::Username, "valid_user1");
    emitter.input(Field::Email, "user@example.com");
    emitter.input(Field::Password, "Abc12345!");
    emitter.input(Field::ConfirmPassword, "Abc12345!");
    emitter.submit();
    emitter.close();

    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    block_on(form.run(events, &crate::net::api::ApiRegistrar, &mut ui));

    assert!(!ui.is_submitting());
    assert!(!ui.is_registered());
    assert_eq!(ui.notice(), Some("Registration failed. Please try again."));
    assert_eq!(ui.field(Field::Password), FieldUi { error: None, indicator: true }, "fields survive a failure");
}

#[test]
fn emitter_submit_with_invalid_fields_only_shakes() {
    use futures::executor::block_on;

    let (emitter, events) = registration::events::channel();
    emitter.input(Field::Email, "nope");
    emitter.submit();
    emitter.close();

    let mut form = RegistrationForm::new();
    let mut ui = RegistrationUi::default();
    block_on(form.run(events, &crate::net::api::ApiRegistrar, &mut ui));

    assert!(ui.is_shaking(ShakeTarget::Submit));
    assert_eq!(ui.notice(), None);
    assert_eq!(ui.field(Field::Email).error.as_deref(), Some("Please enter a valid email address"));
}
