//! Integration tests for the participants pane
//!
//! These tests drive the host app headlessly: frames are rendered with a
//! default egui context and actions go through the real action channel.

use eframe::egui;

use crate::app::ui::panels::CHAT_OVERLAY_REGION;
use crate::app::ConferenceApp;
use crate::config::Settings;
use crate::pane::{
    FooterMenuItem, MenuState, PaneLayout, SectionKind, VisibilityFlags, MORE_ACTIONS_ANCHOR,
};
use crate::protocol::{AppAction, DialogKind};
use crate::roster::{FilterableRoster, Role};
use crate::state::{Conference, ConferenceState};
use crate::ui::panels::PANE_REGION;

fn demo_app() -> ConferenceApp {
    ConferenceApp::with_state(ConferenceState::demo(), Settings::default())
}

fn frame(ctx: &egui::Context, app: &mut ConferenceApp) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_frame(ctx));
}

/// Drives frames with real pointer input on a fixed-size window.
struct Window {
    ctx: egui::Context,
    time: f64,
}

impl Window {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            time: 0.0,
        }
    }

    fn frame(&mut self, app: &mut ConferenceApp, events: Vec<egui::Event>) {
        self.time += 0.1;
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 720.0),
            )),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| app.render_frame(ctx));
    }

    /// Press in one frame, release in the next.
    fn click(&mut self, app: &mut ConferenceApp, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        self.frame(app, vec![egui::Event::PointerMoved(pos), button(true)]);
        self.frame(app, vec![button(false)]);
    }
}

fn menu_open(app: &ConferenceApp) -> Option<bool> {
    app.pane.shell().map(|s| s.menu().is_open())
}

fn trigger_center(app: &ConferenceApp) -> egui::Pos2 {
    let trigger = egui::Id::new(MORE_ACTIONS_ANCHOR).with("trigger");
    app.hub
        .region_rect(trigger)
        .expect("trigger registered this frame")
        .center()
}

/// Moderator mute-all: button -> dialog -> confirm -> everyone else muted
#[test]
fn test_mute_all_confirm_flow() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);

    let shell = app.pane.shell().expect("pane mounted");
    shell.request_mute_everyone(&app.action_tx);
    assert_eq!(app.process_actions(), 1);

    // Dialog open, nobody muted yet, menu untouched
    assert!(app.dialogs.confirm_dialog.is_some());
    assert!(app.state.roster.meeting.iter().all(|p| !p.audio_muted));
    assert_eq!(
        app.pane.shell().map(|s| s.menu().state()),
        Some(MenuState::Closed)
    );

    let confirmed = app
        .dialogs
        .confirm_dialog
        .as_mut()
        .map(|d| d.confirm())
        .expect("confirm dialog");
    app.handle_dialog_action(confirmed);
    assert_eq!(app.process_actions(), 1);

    for p in &app.state.roster.meeting {
        assert_eq!(p.audio_muted, !p.local);
    }
    assert_eq!(app.state.status_messages.len(), 1);
}

/// Footer menu item opens its dialog through the loop and closes the menu
#[test]
fn test_menu_item_opens_moderation_settings() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);

    let tx = app.action_tx.clone();
    let shell = app.pane.shell_mut().expect("pane mounted");
    shell.toggle_menu();
    assert!(shell.menu().is_open());
    shell.activate_menu_item(FooterMenuItem::ModerationSettings, Default::default(), &tx);
    assert!(!shell.menu().is_open());

    app.process_actions();
    assert!(app.dialogs.moderation_dialog.is_some());
}

#[test]
fn test_allow_unmute_toggle_round_trip() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);

    let status = crate::pane::moderation_status(&app.state);
    let tx = app.action_tx.clone();
    let shell = app.pane.shell_mut().expect("pane mounted");
    shell.toggle_menu();
    shell.activate_menu_item(FooterMenuItem::AllowAttendeesToUnmute, status, &tx);
    app.process_actions();

    assert!(app.state.audio_moderation());
    let status = crate::pane::moderation_status(&app.state);
    assert_eq!(FooterMenuItem::AllowAttendeesToUnmute.checked(status), Some(false));
}

/// A click on the conference area closes the open menu
#[test]
fn test_outside_click_closes_menu() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);

    if let Some(shell) = app.pane.shell_mut() {
        shell.toggle_menu();
    }
    frame(&ctx, &mut app);
    assert_eq!(app.pane.shell().map(|s| s.menu().is_open()), Some(true));

    let event = app.hub.hit_test(Some(egui::pos2(5.0, 300.0)));
    assert!(event.path.is_empty());
    app.hub.dispatch(&event);

    assert_eq!(app.pane.shell().map(|s| s.menu().is_open()), Some(false));
}

/// Clicking the trigger toggles the menu even though the same click also
/// reaches the window-wide dismiss listener at the end of the frame
#[test]
fn test_trigger_clicks_and_outside_clicks_with_pointer_input() {
    let mut window = Window::new();
    let mut app = demo_app();
    window.frame(&mut app, Vec::new());

    let trigger = trigger_center(&app);
    let event = app.hub.hit_test(Some(trigger));
    assert!(event.is_within(egui::Id::new(MORE_ACTIONS_ANCHOR)));
    assert_eq!(event.path.first(), Some(&egui::Id::new(PANE_REGION)));

    window.click(&mut app, trigger);
    assert_eq!(menu_open(&app), Some(true));

    window.frame(&mut app, Vec::new());
    assert_eq!(menu_open(&app), Some(true));

    window.click(&mut app, trigger);
    assert_eq!(menu_open(&app), Some(false));

    // Conference area
    window.click(&mut app, trigger);
    assert_eq!(menu_open(&app), Some(true));
    window.click(&mut app, egui::pos2(100.0, 400.0));
    assert_eq!(menu_open(&app), Some(false));

    // Pane body, outside the anchor
    window.click(&mut app, trigger);
    assert_eq!(menu_open(&app), Some(true));
    let pane = app
        .hub
        .region_rect(egui::Id::new(PANE_REGION))
        .expect("pane registered");
    window.click(&mut app, egui::pos2(pane.center().x, pane.top() + 30.0));
    assert_eq!(menu_open(&app), Some(false));

    // None of those clicks asked the host for anything
    assert!(app.action_rx.try_recv().is_err());
}

/// On mobile the chat covers the pane; a click there is outside the menu
#[test]
fn test_chat_overlay_click_closes_menu() {
    let mut window = Window::new();
    let mut app = demo_app();
    window.frame(&mut app, Vec::new());
    let trigger = trigger_center(&app);
    window.click(&mut app, trigger);
    assert_eq!(menu_open(&app), Some(true));

    app.state.is_mobile = true;
    app.state.chat_open = true;
    window.frame(&mut app, Vec::new());

    let event = app.hub.hit_test(Some(trigger_center(&app)));
    assert_eq!(event.path, vec![egui::Id::new(CHAT_OVERLAY_REGION)]);
    app.hub.dispatch(&event);
    assert_eq!(menu_open(&app), Some(false));
}

/// Close button -> ClosePane -> next frame unmounts and frees the listener
#[test]
fn test_close_pane_unmounts() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);
    assert_eq!(app.hub.listener_count(), 1);

    if let Some(shell) = app.pane.shell() {
        shell.request_close(&app.action_tx);
    }
    app.process_actions();
    assert!(!app.state.pane_open);

    frame(&ctx, &mut app);
    assert!(!app.pane.is_mounted());
    assert_eq!(app.hub.listener_count(), 0);
}

#[test]
fn test_toggle_cycles_leave_no_listeners() {
    let ctx = egui::Context::default();
    let mut app = demo_app();

    for _ in 0..5 {
        frame(&ctx, &mut app);
        app.action_tx.send(AppAction::TogglePane).expect("receiver alive");
        app.process_actions();
        frame(&ctx, &mut app);
        app.action_tx.send(AppAction::TogglePane).expect("receiver alive");
        app.process_actions();
    }

    let stats = app.hub.stats();
    assert_eq!(stats.registered, 5);
    assert_eq!(stats.deregistered, 5);
    assert_eq!(stats.outstanding(), 0);
}

#[test]
fn test_start_closed_setting() {
    let settings = Settings {
        start_open: false,
        ..Default::default()
    };
    let mut app = ConferenceApp::with_state(ConferenceState::demo(), settings);
    let ctx = egui::Context::default();
    frame(&ctx, &mut app);

    assert!(!app.pane.is_mounted());
    assert_eq!(app.hub.stats().registered, 0);
}

/// Participants get the roster but no footer and no add-room button
#[test]
fn test_participant_layout() {
    let mut state = ConferenceState::demo();
    state.set_local_role(Role::Participant);

    let layout = PaneLayout::compose(&VisibilityFlags::read(&state)).expect("pane open");
    assert!(layout.footer.is_none());
    assert!(layout.has_section(SectionKind::Meeting));
    assert!(layout.has_section(SectionKind::BreakoutRooms));
    assert!(!layout.has_section(SectionKind::AddBreakoutRoom));
}

#[test]
fn test_unsupported_breakout_rooms_hide_list_and_button() {
    let mut state = ConferenceState::demo();
    state.conference = Some(Conference {
        breakout_rooms_supported: false,
        ..Default::default()
    });

    let layout = PaneLayout::compose(&VisibilityFlags::read(&state)).expect("pane open");
    assert!(!layout.has_section(SectionKind::BreakoutRooms));
    assert!(!layout.has_section(SectionKind::AddBreakoutRoom));
}

/// One query typed in the meeting section filters every roster
#[test]
fn test_search_filters_every_roster() {
    let ctx = egui::Context::default();
    let mut app = demo_app();
    frame(&ctx, &mut app);

    let layout = PaneLayout::compose(&VisibilityFlags::read(&app.state)).expect("pane open");
    let roster = &app.state.roster;
    let shell = app.pane.shell_mut().expect("pane mounted");

    let mut seen = Vec::new();
    shell.for_each_section(&layout, |kind, search| {
        if let Some(search) = search {
            if kind.edits_query() {
                search.set_query("ANN");
            }
            let ids: Vec<u32> = match kind {
                SectionKind::Meeting => roster.meeting.filter(search.query()),
                SectionKind::Lobby => roster.lobby.filter(search.query()),
                SectionKind::CurrentVisitors => roster.visitors.filter(search.query()),
                _ => Vec::new(),
            }
            .into_iter()
            .map(|p| p.id)
            .collect();
            seen.push((kind, search.query().to_string(), ids));
        }
    });

    let meeting = seen.iter().find(|(k, _, _)| *k == SectionKind::Meeting);
    assert_eq!(meeting.map(|(_, _, ids)| ids.clone()), Some(vec![2, 3, 5]));
    // Sections after the meeting list see the new query
    let visitors = seen.iter().find(|(k, _, _)| *k == SectionKind::CurrentVisitors);
    assert_eq!(
        visitors.map(|(_, q, ids)| (q.as_str(), ids.clone())),
        Some(("ANN", vec![30, 32]))
    );
}

#[test]
fn test_lobby_admission_through_loop() {
    let mut app = demo_app();
    app.action_tx.send(AppAction::AdmitLobby(10)).expect("receiver alive");
    app.action_tx
        .send(AppAction::OpenDialog(DialogKind::StopEveryoneVideo))
        .expect("receiver alive");
    assert_eq!(app.process_actions(), 2);

    assert!(app.state.roster.meeting.iter().any(|p| p.id == 10));
    assert_eq!(
        app.dialogs.confirm_dialog.as_ref().map(|d| d.title()),
        Some("Stop everyone's video?")
    );
}
