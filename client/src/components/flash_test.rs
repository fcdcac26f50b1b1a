use super::*;

#[test]
fn feedback_copies_action_outcome() {
    let ok: ActionResult<()> = ActionResult::ok(messages::SCHEDULE_CANCELLED, None);
    assert_eq!(
        Feedback::from(&ok),
        Feedback { success: true, text: messages::SCHEDULE_CANCELLED.to_owned() }
    );

    let failed: ActionResult<()> = ActionResult::failed(&ApiError::Transport("offline".to_owned()));
    let feedback = Feedback::from(&failed);
    assert!(!feedback.success);
    assert_eq!(feedback.text, messages::NETWORK_ERROR);
}

#[test]
fn flash_class_reflects_outcome() {
    assert_eq!(flash_class(true), "flash flash--success");
    assert_eq!(flash_class(false), "flash flash--error");
}
