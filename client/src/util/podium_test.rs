use super::*;

fn ranked(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|rank| Player {
            id: format!("p{rank}"),
            name: format!("Player {rank}"),
            points: 100 - rank as u64,
            rank: rank as u32,
        })
        .collect()
}

fn ids(slots: &[PodiumSlot<'_>]) -> Vec<String> {
    slots.iter().map(|s| s.player.id.clone()).collect()
}

#[test]
fn podium_empty_list_is_empty() {
    assert!(podium(&[]).is_empty());
}

#[test]
fn podium_single_player_shows_first_only() {
    let players = ranked(1);
    let slots = podium(&players);
    assert_eq!(ids(&slots), ["p1"]);
    assert_eq!(slots[0].place, 1);
}

#[test]
fn podium_two_players_second_then_first() {
    let players = vec![
        Player { id: "a".into(), name: "Ann".into(), points: 50, rank: 1 },
        Player { id: "b".into(), name: "Bo".into(), points: 30, rank: 2 },
    ];
    let slots = podium(&players);
    let names: Vec<&str> = slots.iter().map(|s| s.player.name.as_str()).collect();
    assert_eq!(names, ["Bo", "Ann"]);
    assert_eq!(slots.iter().map(|s| s.place).collect::<Vec<_>>(), [2, 1]);
}

#[test]
fn podium_three_players_second_first_third() {
    let players = ranked(3);
    assert_eq!(ids(&podium(&players)), ["p2", "p1", "p3"]);
}

#[test]
fn podium_ignores_players_beyond_third() {
    let players = ranked(8);
    let slots = podium(&players);
    assert_eq!(slots.len(), PODIUM_SIZE);
    assert_eq!(ids(&slots), ["p2", "p1", "p3"]);
}

#[test]
fn podium_length_is_min_of_three_and_count() {
    for count in 0..6 {
        let players = ranked(count);
        assert_eq!(podium(&players).len(), count.min(PODIUM_SIZE));
    }
}

#[test]
fn runners_up_skips_podium() {
    let players = ranked(5);
    let rest = runners_up(&players);
    assert_eq!(rest.iter().map(|p| p.rank).collect::<Vec<_>>(), [4, 5]);
    assert!(runners_up(&ranked(2)).is_empty());
}
