//! Participant roster model and query filtering.
//!
//! Filtering belongs to the roster lists, not the pane: the pane only hands
//! every list the same raw query string.

pub type ParticipantId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Moderator,
    Participant,
    Visitor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub role: Role,
    /// The participant running this client
    pub local: bool,
    pub audio_muted: bool,
    pub video_muted: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, name: &str, role: Role) -> Self {
        Self {
            id,
            name: name.to_string(),
            role,
            local: false,
            audio_muted: false,
            video_muted: false,
        }
    }

    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakoutRoom {
    pub id: u32,
    pub name: String,
    pub participants: Vec<Participant>,
}

/// Case-insensitive substring match. Surrounding whitespace in the query is
/// ignored and an empty query matches everybody.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// A list of people that can be narrowed down by the shared search query.
pub trait FilterableRoster {
    fn filter<'a>(&'a self, query: &str) -> Vec<&'a Participant>;
}

impl FilterableRoster for [Participant] {
    fn filter<'a>(&'a self, query: &str) -> Vec<&'a Participant> {
        self.iter().filter(|p| matches_query(&p.name, query)).collect()
    }
}

impl FilterableRoster for [BreakoutRoom] {
    fn filter<'a>(&'a self, query: &str) -> Vec<&'a Participant> {
        self.iter()
            .flat_map(|room| room.participants.filter(query))
            .collect()
    }
}

impl BreakoutRoom {
    /// Rooms stay listed while searching; only their members are narrowed.
    pub fn members_matching<'a>(&'a self, query: &str) -> Vec<&'a Participant> {
        self.participants.filter(query)
    }
}

/// Everybody the conference knows about, grouped by status.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Active participants, the local one included
    pub meeting: Vec<Participant>,
    /// Participants knocking at the lobby
    pub lobby: Vec<Participant>,
    /// Visitors who asked to be promoted into the meeting
    pub visitor_requests: Vec<Participant>,
    /// Visitors currently watching
    pub visitors: Vec<Participant>,
    pub breakout_rooms: Vec<BreakoutRoom>,
}

impl Roster {
    /// Remote meeting participants (everyone but us).
    pub fn remote_participants_mut(&mut self) -> impl Iterator<Item = &mut Participant> + '_ {
        self.meeting.iter_mut().filter(|p| !p.local)
    }

    pub fn local_participant(&self) -> Option<&Participant> {
        self.meeting.iter().find(|p| p.local)
    }

    /// Move a knocking participant into the meeting.
    pub fn admit_from_lobby(&mut self, id: ParticipantId) -> Option<&Participant> {
        let idx = self.lobby.iter().position(|p| p.id == id)?;
        let mut participant = self.lobby.remove(idx);
        participant.role = Role::Participant;
        self.meeting.push(participant);
        self.meeting.last()
    }

    pub fn reject_from_lobby(&mut self, id: ParticipantId) -> Option<Participant> {
        let idx = self.lobby.iter().position(|p| p.id == id)?;
        Some(self.lobby.remove(idx))
    }

    /// Promote a visitor who asked to join.
    pub fn admit_visitor(&mut self, id: ParticipantId) -> Option<&Participant> {
        let idx = self.visitor_requests.iter().position(|p| p.id == id)?;
        let mut participant = self.visitor_requests.remove(idx);
        participant.role = Role::Participant;
        self.meeting.push(participant);
        self.meeting.last()
    }

    pub fn add_breakout_room(&mut self) -> &BreakoutRoom {
        let id = self.breakout_rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.breakout_rooms.push(BreakoutRoom {
            id,
            name: format!("Breakout room #{}", id),
            participants: Vec::new(),
        });
        &self.breakout_rooms[self.breakout_rooms.len() - 1]
    }

    /// Seed data for the demo application.
    pub fn demo() -> Self {
        Self {
            meeting: vec![
                Participant::new(1, "You", Role::Moderator).local(),
                Participant::new(2, "Anna Lindqvist", Role::Participant),
                Participant::new(3, "Joanne Park", Role::Moderator),
                Participant::new(4, "Marcus Obi", Role::Participant),
                Participant::new(5, "Hannah Weiss", Role::Participant),
            ],
            lobby: vec![
                Participant::new(10, "Annika Ross", Role::Participant),
                Participant::new(11, "Diego Ramos", Role::Participant),
            ],
            visitor_requests: vec![Participant::new(20, "Leon Brandt", Role::Visitor)],
            visitors: vec![
                Participant::new(30, "Suzanne Ng", Role::Visitor),
                Participant::new(31, "Tomasz Nowak", Role::Visitor),
                Participant::new(32, "Ann Carter", Role::Visitor),
            ],
            breakout_rooms: vec![BreakoutRoom {
                id: 1,
                name: "Breakout room #1".to_string(),
                participants: vec![Participant::new(40, "Priya Anand", Role::Participant)],
            }],
        }
    }
}
