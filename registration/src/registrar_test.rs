use super::*;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn sample() -> Registration {
    Registration {
        username: "valid_user1".to_owned(),
        email: "user@example.com".to_owned(),
        password: "Abc12345!".to_owned(),
    }
}

#[test]
fn simulated_registrar_sleeps_for_configured_delay_then_succeeds() {
    let slept = Rc::new(RefCell::new(Vec::new()));
    let log = slept.clone();
    let registrar = SimulatedRegistrar::new(Duration::from_secs(2), move |d: Duration| {
        log.borrow_mut().push(d);
        std::future::ready(())
    });

    assert_eq!(block_on(registrar.register(&sample())), Ok(()));
    assert_eq!(*slept.borrow(), vec![Duration::from_secs(2)]);
}

#[test]
fn registration_debug_redacts_password() {
    let rendered = format!("{:?}", sample());
    assert!(rendered.contains("valid_user1"));
    assert!(!rendered.contains("Abc12345!"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn registration_serializes_all_fields() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["username"], "valid_user1");
    assert_eq!(json["email"], "user@example.com");
    assert_eq!(json["password"], "Abc12345!");
}
