//! Behavioural coverage for user and work profiles.

use std::cell::RefCell;

use hivemind_core::{Rating, RatingRecord, RatingScheme, RatingsTable, UserProfile, WorkProfile};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for the profile scenarios.
pub struct TestContext {
    table: RefCell<Option<RatingsTable>>,
    user: RefCell<Option<UserProfile>>,
    work: RefCell<Option<WorkProfile>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        table: RefCell::new(None),
        user: RefCell::new(None),
        work: RefCell::new(None),
    }
}

#[given("a binary ratings table with two users")]
fn binary_table(context: &TestContext) {
    let table = RatingsTable::new(
        RatingScheme::Binary,
        vec![
            RatingRecord::new(1, 10, Rating::Like),
            RatingRecord::new(1, 11, Rating::Dislike),
            RatingRecord::new(2, 10, Rating::Like),
            RatingRecord::new(2, 11, Rating::Like),
        ],
    )
    .expect("fixture rows are binary");
    *context.table.borrow_mut() = Some(table);
}

#[when("I build the profile for user 1")]
fn profile_known_user(context: &TestContext) {
    build_user(context, 1);
}

#[when("I build the profile for user 99")]
fn profile_unknown_user(context: &TestContext) {
    build_user(context, 99);
}

#[when("I build the work profile for work 10")]
fn profile_work(context: &TestContext) {
    let table = context.table.borrow();
    let table = table.as_ref().expect("table must be initialised");
    *context.work.borrow_mut() = Some(WorkProfile::build(10, table));
}

#[then("the profile counts one like and one dislike")]
fn counts_like_and_dislike(context: &TestContext) {
    let user = context.user.borrow();
    let user = user.as_ref().expect("profile should be built");
    assert_eq!(user.counts().count(Rating::Like), 1);
    assert_eq!(user.counts().count(Rating::Dislike), 1);
    assert_eq!(user.records().len(), 2);
}

#[then("the profile is empty")]
fn profile_is_empty(context: &TestContext) {
    let user = context.user.borrow();
    let user = user.as_ref().expect("profile should be built");
    assert_eq!(user.counts().total(), 0);
    assert!(user.rated_works().is_empty());
}

#[then("work 10 is liked by users 1 and 2 and disliked by nobody")]
fn work_raters(context: &TestContext) {
    let work = context.work.borrow();
    let work = work.as_ref().expect("work profile should be built");
    assert_eq!(work.raters(Rating::Like), &[1, 2]);
    assert!(work.raters(Rating::Dislike).is_empty());
    assert_eq!(work.rated_by(), 2);
}

fn build_user(context: &TestContext, user_id: u64) {
    let table = context.table.borrow();
    let table = table.as_ref().expect("table must be initialised");
    *context.user.borrow_mut() = Some(UserProfile::build(user_id, table));
}

#[scenario(path = "tests/features/profiles.feature", index = 0)]
fn counting_known_user(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/profiles.feature", index = 1)]
fn profiling_unknown_user(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/profiles.feature", index = 2)]
fn grouping_work_raters(context: TestContext) {
    let _ = context;
}
