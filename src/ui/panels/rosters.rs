//! Roster section renderers.
//!
//! Each section gets the pane's shared query; only the meeting list edits it.

use crossbeam_channel::Sender;
use eframe::egui;

use crate::pane::{SearchQuery, SectionKind};
use crate::protocol::AppAction;
use crate::roster::{FilterableRoster, Participant};
use crate::state::ConferenceState;
use crate::ui::theme::{self, PaneTheme};

/// Render one body section.
pub fn render_section(
    ui: &mut egui::Ui,
    kind: SectionKind,
    search: Option<&mut SearchQuery>,
    state: &ConferenceState,
    theme: &PaneTheme,
    action_tx: &Sender<AppAction>,
) {
    let moderator = state.is_local_moderator();
    let roster = &state.roster;

    match kind {
        SectionKind::Meeting => {
            if let Some(search) = search {
                render_search_input(ui, search);
                let people = roster.meeting.filter(search.query());
                let title = format!("MEETING PARTICIPANTS ({})", roster.meeting.len());
                theme::section_header(ui, &title, theme);
                if people.is_empty() {
                    ui.label(egui::RichText::new("No matching participants").color(theme.text_muted));
                }
                for p in people {
                    render_participant_row(ui, p, theme, |_| {});
                }
            }
        }
        SectionKind::Visitors => {
            let query = query_of(&search);
            let people = roster.visitor_requests.filter(query);
            if people.is_empty() {
                return;
            }
            let title = format!("VISITORS WANTING TO JOIN ({})", roster.visitor_requests.len());
            theme::section_header(ui, &title, theme);
            for p in people {
                render_participant_row(ui, p, theme, |ui| {
                    if moderator && ui.small_button("Admit").clicked() {
                        send(action_tx, AppAction::AdmitVisitor(p.id));
                    }
                });
            }
        }
        SectionKind::Lobby => {
            let query = query_of(&search);
            let people = roster.lobby.filter(query);
            if people.is_empty() {
                return;
            }
            let title = format!("LOBBY ({})", roster.lobby.len());
            theme::section_header(ui, &title, theme);
            for p in people {
                render_participant_row(ui, p, theme, |ui| {
                    if !moderator {
                        return;
                    }
                    if ui.small_button("Reject").clicked() {
                        send(action_tx, AppAction::RejectLobby(p.id));
                    }
                    if ui.small_button("Admit").clicked() {
                        send(action_tx, AppAction::AdmitLobby(p.id));
                    }
                });
            }
        }
        SectionKind::BreakoutRooms => {
            let query = query_of(&search);
            if roster.breakout_rooms.is_empty() {
                return;
            }
            theme::section_header(ui, "BREAKOUT ROOMS", theme);
            for room in &roster.breakout_rooms {
                let members = room.members_matching(query);
                let header = format!("{} ({})", room.name, room.participants.len());
                egui::CollapsingHeader::new(header)
                    .id_salt(("breakout_room", room.id))
                    .default_open(true)
                    .show(ui, |ui| {
                        for p in members {
                            render_participant_row(ui, p, theme, |_| {});
                        }
                    });
            }
        }
        SectionKind::AddBreakoutRoom => {
            ui.add_space(8.0);
            let label = egui::RichText::new("Add breakout room").color(egui::Color32::WHITE);
            let button = egui::Button::new(label)
                .fill(theme.accent)
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                send(action_tx, AppAction::AddBreakoutRoom);
            }
        }
        SectionKind::CurrentVisitors => {
            let query = query_of(&search);
            let people = roster.visitors.filter(query);
            let title = format!("CURRENT VISITORS ({})", roster.visitors.len());
            theme::section_header(ui, &title, theme);
            for p in people {
                render_participant_row(ui, p, theme, |_| {});
            }
        }
    }
}

fn query_of<'a>(search: &'a Option<&mut SearchQuery>) -> &'a str {
    search.as_deref().map(SearchQuery::query).unwrap_or("")
}

fn render_search_input(ui: &mut egui::Ui, search: &mut SearchQuery) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(search.text_mut())
                .hint_text("🔍 Search participants")
                .desired_width(ui.available_width() - 28.0),
        );
        if !search.is_empty() && ui.small_button("✕").on_hover_text("Clear search").clicked() {
            search.clear();
        }
    });
}

/// One participant: avatar, name, mute state, then trailing `actions`.
fn render_participant_row(
    ui: &mut egui::Ui,
    participant: &Participant,
    theme: &PaneTheme,
    actions: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.set_min_height(32.0);
        theme::render_avatar(ui, &participant.name, 22.0);

        let mut name = participant.name.clone();
        if participant.local {
            name.push_str(" (You)");
        }
        ui.label(
            egui::RichText::new(name)
                .size(13.0)
                .color(theme::role_color(theme, participant.role)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            actions(ui);
            if participant.video_muted {
                ui.label(egui::RichText::new("📷").color(theme.error))
                    .on_hover_text("Video stopped");
            }
            if participant.audio_muted {
                ui.label(egui::RichText::new("🔇").color(theme.error))
                    .on_hover_text("Muted");
            }
        });
    });
}

fn send(tx: &Sender<AppAction>, action: AppAction) {
    if let Err(e) = tx.send(action) {
        tracing::warn!("roster action dropped: {}", e);
    }
}
