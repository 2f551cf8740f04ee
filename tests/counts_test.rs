//! Ownership count tests: direct tallies and subtree aggregates.

use landtree::util::testing::init_test_setup;
use landtree::{AggregateCounter, CompanyArena, GraphBuilder, ParcelCounts};
use rstest::{fixture, rstest};

const COMPANIES: &str = "\
company_id,name,parent
comp1,Company 1,comp0
comp2,Company 2,comp0
comp5,Company 5,comp1
comp3,Company 3,comp1
comp0,Company 0,
comp4,Company 4,comp3
";

const OWNERSHIP: &str = "\
land_id,company_id
land0,comp1
land1,comp0
land2,comp2
land2.1,comp2
land3,comp3
land4,comp4
land4.1,comp4
land4.2,comp4
";

#[fixture]
fn arena() -> CompanyArena {
    init_test_setup();
    GraphBuilder::new()
        .build_from_csv(COMPANIES.as_bytes())
        .unwrap()
}

#[fixture]
fn counts() -> ParcelCounts {
    init_test_setup();
    ParcelCounts::from_csv(OWNERSHIP.as_bytes()).unwrap()
}

// ============================================================
// Direct Count Tests
// ============================================================

#[rstest]
#[case("comp0", 1)]
#[case("comp1", 1)]
#[case("comp2", 2)]
#[case("comp3", 1)]
#[case("comp4", 3)]
#[case("comp5", 0)]
#[case("not-in-table", 0)]
fn given_ownership_table_when_tallying_then_direct_counts_match(
    counts: ParcelCounts,
    #[case] company_id: &str,
    #[case] expected: u64,
) {
    assert_eq!(counts.direct(company_id), expected);
}

// ============================================================
// Aggregate Count Tests
// ============================================================

#[rstest]
#[case("comp0", 8)]
#[case("comp1", 5)]
#[case("comp2", 2)]
#[case("comp3", 4)]
#[case("comp4", 3)]
#[case("comp5", 0)]
fn given_company_when_aggregating_then_sums_whole_subtree(
    arena: CompanyArena,
    counts: ParcelCounts,
    #[case] company_id: &str,
    #[case] expected: u64,
) {
    let mut counter = AggregateCounter::new(&arena, &counts);
    let idx = arena.lookup(company_id).unwrap();
    assert_eq!(counter.aggregate(idx), expected);
}

#[rstest]
fn given_every_company_when_aggregating_then_recursive_identity_holds(
    arena: CompanyArena,
    counts: ParcelCounts,
) {
    let mut counter = AggregateCounter::new(&arena, &counts);
    for company_id in ["comp0", "comp1", "comp2", "comp3", "comp4", "comp5"] {
        let idx = arena.lookup(company_id).unwrap();
        let children_sum: u64 = arena
            .sorted_children(idx)
            .iter()
            .map(|&child| counter.aggregate(child))
            .sum();
        assert_eq!(
            counter.aggregate(idx),
            counts.direct(company_id) + children_sum,
            "identity violated for {}",
            company_id
        );
    }
}

#[rstest]
fn given_leaf_without_parcels_when_aggregating_then_returns_zero(
    arena: CompanyArena,
    counts: ParcelCounts,
) {
    let mut counter = AggregateCounter::new(&arena, &counts);
    let comp5 = arena.lookup("comp5").unwrap();
    assert_eq!(counter.aggregate(comp5), 0);
}

#[rstest]
fn given_repeated_queries_when_aggregating_then_memo_returns_same_value(
    arena: CompanyArena,
    counts: ParcelCounts,
) {
    let mut counter = AggregateCounter::new(&arena, &counts);
    let root = arena.root().unwrap();
    let first = counter.aggregate(root);
    assert_eq!(counter.aggregate(root), first);
}
