use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::*;

pub(crate) fn id(name: &str) -> ParticipantId {
    ParticipantId::from(name)
}

fn participant(name: &str, position: u32, points: u32) -> Participant {
    Participant {
        id: id(name),
        name: name.to_uppercase(),
        position: Some(position),
        points,
    }
}

fn round(number: u32, name: &str, has_sprint: bool) -> Round {
    Round {
        number,
        name: name.to_owned(),
        date: NaiveDate::from_ymd_opt(2024, 3, number * 7),
        has_sprint,
    }
}

fn results(entries: &[(&str, Finish, u32)]) -> EventResults {
    entries
        .iter()
        .map(|(name, finish, points)| {
            (
                id(name),
                ResultEntry {
                    finish: *finish,
                    points: *points,
                },
            )
        })
        .collect::<BTreeMap<_, _>>()
}

/// Four rounds: 1 and 2 (with sprint) are done, 3 has race qualifying
/// published, 4 (with sprint) has nothing yet. `sub` is a substitute
/// ranked 21st who never took part.
pub(crate) fn sample_snapshot() -> SeasonSnapshot {
    let mut snapshot = SeasonSnapshot {
        season: 2024,
        rounds: vec![
            round(1, "Bahrain Grand Prix", false),
            round(2, "Chinese Grand Prix", true),
            round(3, "Japanese Grand Prix", false),
            round(4, "Miami Grand Prix", true),
        ],
        participants: vec![
            participant("ver", 1, 59),
            participant("lec", 2, 24),
            participant("nor", 3, 25),
            participant("sub", 21, 0),
        ],
        ..Default::default()
    };

    snapshot.results.insert(
        1,
        EventKind::Race,
        results(&[
            ("ver", Finish::Classified(1), 25),
            ("nor", Finish::Classified(2), 18),
            ("lec", Finish::DidNotFinish, 0),
        ]),
    );
    snapshot.results.insert(
        2,
        EventKind::Sprint,
        results(&[
            ("ver", Finish::Classified(1), 8),
            ("nor", Finish::Classified(2), 7),
            ("lec", Finish::Classified(3), 6),
        ]),
    );
    snapshot.results.insert(
        2,
        EventKind::Race,
        results(&[
            ("ver", Finish::Classified(1), 26),
            ("lec", Finish::Classified(2), 18),
            ("nor", Finish::DidNotFinish, 0),
        ]),
    );
    snapshot.qualifying.insert(
        3,
        EventKind::Race,
        [id("lec"), id("nor"), id("ver")].into_iter().collect(),
    );
    snapshot
}
