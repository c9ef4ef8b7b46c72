use super::*;
use futures::StreamExt;
use futures::executor::block_on;

#[test]
fn emitted_events_arrive_in_order() {
    let (emitter, events) = channel();
    assert!(emitter.input(Field::Username, "valid_user1"));
    assert!(emitter.submit());
    emitter.close();

    let received: Vec<FormEvent> = block_on(events.collect());
    assert_eq!(
        received,
        vec![
            FormEvent::Input { field: Field::Username, value: "valid_user1".to_owned() },
            FormEvent::Submit,
        ]
    );
}

#[test]
fn cloned_emitters_share_the_stream() {
    let (emitter, events) = channel();
    let other = emitter.clone();
    emitter.input(Field::Email, "a@b.co");
    other.input(Field::Password, "Abc12345!");
    emitter.close();

    let received: Vec<FormEvent> = block_on(events.collect());
    assert_eq!(received.len(), 2);
}

#[test]
fn emit_after_receiver_dropped_reports_false() {
    let (emitter, events) = channel();
    drop(events);
    assert!(!emitter.submit());
}

#[test]
fn emit_after_close_reports_false() {
    let (emitter, _events) = channel();
    emitter.close();
    assert!(!emitter.input(Field::Username, "abc"));
}
