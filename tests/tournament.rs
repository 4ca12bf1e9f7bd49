use std::{fs, path::PathBuf, process};

use rustc_hash::FxHashSet;

use swiss_tournament::{
    ByePolicy, FileStore, MemoryStore, Outcome, PlayerId, Storage, Tournament, TournamentError,
};

fn new_tournament() -> Tournament<MemoryStore> {
    Tournament::new(MemoryStore::new())
}

fn temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("swiss-tournament-{}-{name}.ron", process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn delete_and_count() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    tournament.delete_matches()?;
    tournament.delete_players()?;
    assert_eq!(tournament.count_players()?, 0);

    tournament.register_player("Chandra Nalaar")?;
    assert_eq!(tournament.count_players()?, 1);

    tournament.register_player("Markov Chaney")?;
    tournament.register_player("Joe Malik")?;
    tournament.register_player("Mao Tsu-hsi")?;
    tournament.register_player("Atlanta Hope")?;
    assert_eq!(tournament.count_players()?, 5);

    tournament.delete_players()?;
    assert_eq!(tournament.count_players()?, 0);

    Ok(())
}

#[test]
fn standings_before_matches() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    tournament.register_player("Melpomene Murray")?;
    tournament.register_player("Randy Schwartz")?;

    let standings = tournament.player_standings()?;
    assert_eq!(standings.len(), 2);

    for standing in &standings {
        assert_eq!((standing.wins, standing.matches, standing.ties), (0, 0, 0));
    }

    let names: FxHashSet<_> = standings.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains("Melpomene Murray"));
    assert!(names.contains("Randy Schwartz"));

    Ok(())
}

#[test]
fn report_matches() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    let bruno = tournament.register_player("Bruno Walton")?;
    let boots = tournament.register_player("Boots O'Neal")?;
    let cathy = tournament.register_player("Cathy Burton")?;
    let diane = tournament.register_player("Diane Grant")?;

    tournament.report_match(bruno, boots, Outcome::Player1Won)?;
    tournament.report_match(diane, cathy, Outcome::Player1Won)?;

    for standing in tournament.player_standings()? {
        assert_eq!(standing.matches, 1);
        if standing.id == bruno || standing.id == diane {
            assert_eq!(standing.wins, 1);
        } else {
            assert_eq!(standing.wins, 0);
            assert_eq!(standing.losses(), 1);
        }
    }

    Ok(())
}

#[test]
fn pairings_follow_standings() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    let twilight = tournament.register_player("Twilight Sparkle")?;
    let fluttershy = tournament.register_player("Fluttershy")?;
    let applejack = tournament.register_player("Applejack")?;
    let pinkie = tournament.register_player("Pinkie Pie")?;

    tournament.report_match(twilight, fluttershy, Outcome::Player1Won)?;
    tournament.report_match(applejack, pinkie, Outcome::Player1Won)?;

    let pairings = tournament.swiss_pairings()?;
    assert_eq!(pairings.len(), 2);

    let pairs: FxHashSet<(PlayerId, PlayerId)> = pairings
        .iter()
        .map(|p| (p.id1.min(p.id2), p.id1.max(p.id2)))
        .collect();

    let expected: FxHashSet<(PlayerId, PlayerId)> = [
        (twilight.min(applejack), twilight.max(applejack)),
        (fluttershy.min(pinkie), fluttershy.max(pinkie)),
    ]
    .into_iter()
    .collect();

    assert_eq!(pairs, expected);

    Ok(())
}

#[test]
fn ties_rank_above_losses() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    for name in ["A", "B", "C", "D"] {
        tournament.register_player(name)?;
    }

    tournament.report_match(1, 2, Outcome::Player1Won)?;
    tournament.report_match(3, 4, Outcome::Tie)?;

    let order: Vec<_> = tournament
        .player_standings()?
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(order, vec![1, 3, 4, 2]);

    let pairings = tournament.swiss_pairings()?;
    assert_eq!((pairings[0].id1, pairings[0].id2), (1, 3));
    assert_eq!((pairings[1].id1, pairings[1].id2), (4, 2));

    Ok(())
}

#[test]
fn odd_player_count() -> anyhow::Result<()> {
    let mut tournament = new_tournament();
    for name in ["A", "B", "C"] {
        tournament.register_player(name)?;
    }

    let error = tournament.swiss_pairings().unwrap_err();
    assert_eq!(
        error.downcast_ref::<TournamentError>(),
        Some(&TournamentError::OddPlayerCount { count: 3 })
    );

    let round = tournament.next_round(ByePolicy::LowestRanked)?;
    assert_eq!(round.pairings.len(), 1);
    assert_eq!(round.bye.map(|bye| bye.id), Some(3));

    Ok(())
}

#[test]
fn file_store_survives_reopening() -> anyhow::Result<()> {
    let path = temp_file("reopen");

    let mut tournament = Tournament::new(FileStore::open(&path)?);
    let ann = tournament.register_player("Ann")?;
    let bo = tournament.register_player("Bo")?;
    tournament.report_match(ann, bo, Outcome::Tie)?;
    let standings = tournament.player_standings()?;

    let store = FileStore::open(&path)?;
    assert_eq!(store.count_players()?, 2);
    assert_eq!(store.list_matches()?.len(), 1);

    let mut tournament = Tournament::new(store);
    assert_eq!(tournament.player_standings()?, standings);
    assert_eq!(tournament.register_player("Cy")?, 3);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn file_store_deletes_survive_reopening() -> anyhow::Result<()> {
    let path = temp_file("deletes");

    let mut tournament = Tournament::new(FileStore::open(&path)?);
    let ann = tournament.register_player("Ann")?;
    let bo = tournament.register_player("Bo")?;
    tournament.report_match(ann, bo, Outcome::Player1Won)?;

    tournament.delete_matches()?;
    let store = FileStore::open(&path)?;
    assert!(store.list_matches()?.is_empty());
    assert_eq!(store.count_players()?, 2);

    let mut tournament = Tournament::new(store);
    tournament.delete_players()?;
    let store = FileStore::open(&path)?;
    assert_eq!(store.count_players()?, 0);

    let mut tournament = Tournament::new(store);
    assert_eq!(tournament.register_player("Cy")?, 3);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn file_store_rejects_bad_ron() -> anyhow::Result<()> {
    let path = temp_file("bad");
    fs::write(&path, "not a tournament")?;

    assert!(FileStore::open(&path).is_err());

    fs::remove_file(&path)?;
    Ok(())
}
