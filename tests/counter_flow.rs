use fluxstore::{counter_store, StoreError};
use serde_json::json;

#[test]
fn count_is_zero_after_construction() {
    let store = counter_store();
    assert_eq!(store.state().count, 0);
}

#[test]
fn commit_increment_then_decrement_round_trips() {
    let store = counter_store();
    store.commit("increment", None).unwrap();
    store.commit("decrement", None).unwrap();
    assert_eq!(store.state().count, 0);
}

#[test]
fn n_increments_set_count_to_n() {
    let store = counter_store();
    for n in 1..=10 {
        store.commit("increment", None).unwrap();
        assert_eq!(store.state().count, n);
    }
}

#[tokio::test]
async fn action_increment_commits_immediately() {
    let store = counter_store();
    store.dispatch("increment", None).unwrap().await.unwrap();
    assert_eq!(store.state().count, 1);
}

#[tokio::test]
async fn action_decrement_commits_immediately() {
    let store = counter_store();
    store.dispatch("decrement", None).unwrap().await.unwrap();
    assert_eq!(store.state().count, -1);
}

#[tokio::test]
async fn increment_if_odd_increments_odd_count() {
    let store = counter_store();
    store.commit("increment", None).unwrap();
    assert_eq!(store.state().count, 1);

    store.dispatch("incrementIfOdd", None).unwrap().await.unwrap();
    assert_eq!(store.state().count, 2);
}

#[tokio::test]
async fn increment_if_odd_is_a_noop_on_even_count() {
    let store = counter_store();
    store.commit("increment", None).unwrap();
    store.commit("increment", None).unwrap();
    assert_eq!(store.state().count, 2);

    store.dispatch("incrementIfOdd", None).unwrap().await.unwrap();
    assert_eq!(store.state().count, 2);
}

#[tokio::test]
async fn increment_if_odd_handles_negative_odd_counts() {
    let store = counter_store();
    store.commit("decrement", None).unwrap();
    assert_eq!(store.state().count, -1);

    store.dispatch("incrementIfOdd", None).unwrap().await.unwrap();
    assert_eq!(store.state().count, 0);
}

#[test]
fn even_or_odd_tracks_the_count() {
    let store = counter_store();
    assert_eq!(store.getter("evenOrOdd").unwrap(), json!("even"));

    store.commit("increment", None).unwrap();
    assert_eq!(store.getter("evenOrOdd").unwrap(), json!("odd"));

    store.commit("increment", None).unwrap();
    assert_eq!(store.getter("evenOrOdd").unwrap(), json!("even"));

    store.commit("increment", None).unwrap();
    assert_eq!(store.getter("evenOrOdd").unwrap(), json!("odd"));
}

#[test]
fn unknown_mutation_fails_and_count_is_unchanged() {
    let store = counter_store();
    store.commit("increment", None).unwrap();

    let err = store.commit("reset", None).unwrap_err();
    assert!(matches!(err, StoreError::UnknownMutation { ref name } if name == "reset"));
    assert_eq!(store.state().count, 1);
}

#[test]
fn unknown_action_fails_and_count_is_unchanged() {
    let store = counter_store();
    let err = store.dispatch("resetAsync", None).err().unwrap();
    assert!(matches!(err, StoreError::UnknownAction { ref name } if name == "resetAsync"));
    assert_eq!(store.state().count, 0);
}

#[test]
fn unknown_getter_fails() {
    let store = counter_store();
    let err = store.getter("oddOrEven").unwrap_err();
    assert!(matches!(err, StoreError::UnknownGetter { ref name } if name == "oddOrEven"));
}
