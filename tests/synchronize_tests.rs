use commitlog::{Commit, CommitLog};
use pretty_assertions::assert_eq;
use std::time::Duration;

/// Commit with a short pause so consecutive commits land on distinct
/// millisecond timestamps
fn commit_spaced(log: &mut CommitLog, message: &str) -> commitlog::CommitId {
    let id = log.commit(message);
    std::thread::sleep(Duration::from_millis(2));
    id
}

fn timestamps(log: &CommitLog) -> Vec<i64> {
    log.iter().map(Commit::timestamp_millis).collect()
}

#[test]
fn synchronize_drains_the_other_log_into_one_sorted_chain()
-> Result<(), Box<dyn std::error::Error>> {
    let mut ours = CommitLog::new("ours")?;
    let mut theirs = CommitLog::new("theirs")?;

    // Interleave commits across the two logs so the merge has to splice
    let a1 = commit_spaced(&mut ours, "ours: init");
    let b1 = commit_spaced(&mut theirs, "theirs: init");
    let a2 = commit_spaced(&mut ours, "ours: add feature");
    let b2 = commit_spaced(&mut theirs, "theirs: add feature");

    ours.synchronize(&mut theirs);

    assert_eq!(ours.len(), 4);
    assert_eq!(theirs.len(), 0);
    assert_eq!(theirs.head(), None);

    for id in [&a1, &b1, &a2, &b2] {
        assert!(ours.contains(id.as_ref()));
        assert!(!theirs.contains(id.as_ref()));
    }

    // The last commit overall was made to `theirs`, so it leads the merge
    assert_eq!(ours.head(), Some(&b2));

    let merged = timestamps(&ours);
    assert_eq!(merged.len(), ours.iter().count());
    assert!(merged.windows(2).all(|pair| pair[0] >= pair[1]));

    Ok(())
}

#[test]
fn synchronize_preserves_each_chains_relative_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut ours = CommitLog::new("ours")?;
    let mut theirs = CommitLog::new("theirs")?;

    let ours_ids = [
        commit_spaced(&mut ours, "o1"),
        commit_spaced(&mut ours, "o2"),
    ];
    let theirs_ids = [
        commit_spaced(&mut theirs, "t1"),
        commit_spaced(&mut theirs, "t2"),
    ];

    ours.synchronize(&mut theirs);

    let merged_ids: Vec<&commitlog::CommitId> = ours.iter().map(Commit::id).collect();

    // Newest first within each source log
    let ours_positions: Vec<usize> = ours_ids
        .iter()
        .map(|id| merged_ids.iter().position(|m| *m == id).unwrap())
        .collect();
    let theirs_positions: Vec<usize> = theirs_ids
        .iter()
        .map(|id| merged_ids.iter().position(|m| *m == id).unwrap())
        .collect();

    assert!(ours_positions[0] > ours_positions[1]);
    assert!(theirs_positions[0] > theirs_positions[1]);

    Ok(())
}

#[test]
fn synchronize_with_an_empty_log_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut ours = CommitLog::new("ours")?;
    let mut empty = CommitLog::new("empty")?;

    let first = commit_spaced(&mut ours, "init");
    let second = commit_spaced(&mut ours, "add feature");

    ours.synchronize(&mut empty);

    assert_eq!(ours.len(), 2);
    assert_eq!(ours.head(), Some(&second));
    assert!(ours.contains(first.as_ref()));
    assert!(empty.is_empty());

    Ok(())
}

#[test]
fn synchronize_into_an_empty_log_adopts_the_whole_chain()
-> Result<(), Box<dyn std::error::Error>> {
    let mut ours = CommitLog::new("ours")?;
    let mut theirs = CommitLog::new("theirs")?;

    let first = commit_spaced(&mut theirs, "init");
    let second = commit_spaced(&mut theirs, "add feature");

    ours.synchronize(&mut theirs);

    assert_eq!(ours.len(), 2);
    assert_eq!(ours.head(), Some(&second));
    assert!(ours.contains(first.as_ref()));
    assert!(theirs.is_empty());
    assert_eq!(theirs.head(), None);

    Ok(())
}

#[test]
fn synchronize_twice_collects_three_logs() -> Result<(), Box<dyn std::error::Error>> {
    let mut trunk = CommitLog::new("trunk")?;
    let mut left = CommitLog::new("left")?;
    let mut right = CommitLog::new("right")?;

    commit_spaced(&mut trunk, "trunk: init");
    commit_spaced(&mut left, "left: init");
    commit_spaced(&mut right, "right: init");
    commit_spaced(&mut left, "left: more");

    trunk.synchronize(&mut left);
    trunk.synchronize(&mut right);

    assert_eq!(trunk.len(), 4);
    assert!(left.is_empty());
    assert!(right.is_empty());

    let merged = timestamps(&trunk);
    assert!(merged.windows(2).all(|pair| pair[0] >= pair[1]));

    Ok(())
}
