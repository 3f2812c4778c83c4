// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios across whole controller lifecycles.

use interlude_controller::chat::{Attachment, ChatInput, PreviewRegistry};
use interlude_controller::feedback::{FeedbackPopover, FeedbackState};
use interlude_controller::login::{LoginButton, LoginState};
use interlude_controller::trash::{TrashFlow, TrashState};
use interlude_dismiss::InputEvent;
use kurbo::{Point, Rect};

#[test]
fn login_cycle_with_a_coarse_tick_cadence() {
    // Hosts tick at frame cadence, not at exact deadlines; both delayed
    // transitions still land, in order, on the first tick at or after them.
    let mut button = LoginButton::new();
    assert!(button.activate(0));

    let mut now = 0;
    while *button.state() == LoginState::Loading {
        now += 16;
        button.tick(now);
    }
    assert_eq!(*button.state(), LoginState::Success);
    assert!(now >= 1750 && now < 1750 + 16);

    while *button.state() == LoginState::Success {
        now += 16;
        button.tick(now);
    }
    assert_eq!(*button.state(), LoginState::Idle);
    assert!(now >= 3500 && now < 3500 + 16);
}

#[test]
fn login_teardown_mid_flight_leaves_no_pending_work() {
    let mut button = LoginButton::new();
    button.activate(0);
    button.tick(1750);
    assert_eq!(*button.state(), LoginState::Success);

    button.teardown();
    assert!(!button.tick(3500));
    assert_eq!(*button.state(), LoginState::Success);
}

#[test]
fn trash_flow_reference_scenario() {
    // {A, B, C, D}: select B and D, confirm, commit, wait out the reset.
    let mut flow = TrashFlow::new(['A', 'B', 'C', 'D']);

    flow.toggle('B');
    flow.toggle('D');
    assert_eq!(*flow.state(), TrashState::Selecting);

    assert!(flow.confirm());
    assert_eq!(flow.visible(), [&'A', &'C']);
    assert_eq!(flow.staged(), ['B', 'D']);

    assert!(flow.commit(10_000));
    assert_eq!(*flow.state(), TrashState::Removed);
    assert_eq!(flow.items(), ['A', 'C']);

    // Selection order is preserved into the rendered pile.
    assert_eq!(flow.staged(), ['B', 'D']);

    assert!(!flow.tick(11_199));
    assert!(flow.tick(11_200));
    assert_eq!(*flow.state(), TrashState::Browsing);
    assert_eq!(flow.items(), ['A', 'C']);
    assert!(flow.staged().is_empty());
    assert_eq!(flow.selected_count(), 0);

    // The survivors are selectable again immediately.
    assert!(flow.toggle('A'));
    assert_eq!(*flow.state(), TrashState::Selecting);
}

#[test]
fn trash_commit_is_refused_once_an_external_removal_drains_the_review() {
    let mut flow = TrashFlow::new(['A', 'B']);
    flow.toggle('B');
    flow.confirm();

    // 'B' is deleted elsewhere while the review step is up.
    assert!(flow.remove_item(&'B'));
    assert_eq!(*flow.state(), TrashState::Browsing);

    assert!(!flow.commit(0));
    assert!(!flow.tick(1200));
    assert_eq!(flow.items(), ['A']);
}

#[test]
fn trash_back_then_reconfirm_commits_the_same_selection() {
    let mut flow = TrashFlow::new([1, 2, 3]);
    flow.toggle(2);
    flow.confirm();
    assert!(flow.back());

    // Second thoughts about the second thoughts.
    assert!(flow.confirm());
    assert!(flow.commit(0));
    flow.tick(1200);
    assert_eq!(flow.items(), [1, 3]);
}

#[test]
fn feedback_full_cycle_then_reopen_is_clean() {
    let region = Rect::new(100.0, 100.0, 400.0, 300.0);
    let mut popover = FeedbackPopover::new();

    assert!(popover.open(region));
    popover.set_draft("first round");
    assert!(popover.submit(0));
    popover.tick(1500);
    popover.tick(3300);
    assert_eq!(*popover.state(), FeedbackState::Closed);

    // The second session starts from scratch: empty draft, no timers, and
    // dismissal working against the new region.
    assert!(popover.open(region));
    assert_eq!(popover.draft(), "");
    assert!(!popover.tick(10_000));
    assert_eq!(*popover.state(), FeedbackState::Idle);

    let outside = InputEvent::pointer_down(Point::new(0.0, 0.0));
    assert!(popover.handle_input(&outside, 10_000));
    assert!(!popover.is_open());
}

#[test]
fn attachment_handles_never_leak_across_composer_lifecycles() {
    let registry = PreviewRegistry::new();

    let drafts: Vec<_> = {
        let mut input = ChatInput::new();

        // Picker batch, one removed, then a drop adds two more.
        input.attach_all([
            file(&registry, "a.png"),
            file(&registry, "b.png"),
            file(&registry, "c.png"),
        ]);
        input.remove_attachment(1);
        input.attach_all([file(&registry, "d.png"), file(&registry, "e.png")]);
        assert_eq!(registry.live_count(), 4);

        input.set_message("batch one");
        let first = input.submit().unwrap();

        // A second round that never submits.
        input.attach(file(&registry, "f.png"));
        assert_eq!(registry.live_count(), 5);

        vec![first]
        // `input` drops here, releasing f.png.
    };
    assert_eq!(registry.live_count(), 4);

    drop(drafts);
    assert_eq!(registry.live_count(), 0);
}

fn file(registry: &PreviewRegistry, name: &str) -> Attachment {
    Attachment {
        name: name.into(),
        size_bytes: 128 * 1024,
        mime: Some("image/png".into()),
        preview: registry.issue(),
    }
}
