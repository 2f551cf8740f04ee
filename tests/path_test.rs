//! Root-to-target path tests.

use landtree::util::testing::init_test_setup;
use landtree::{CompanyArena, GraphBuilder};
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

#[fixture]
fn arena() -> CompanyArena {
    init_test_setup();
    GraphBuilder::new()
        .build_from_csv(COMPANIES.as_bytes())
        .unwrap()
}

fn path_ids(arena: &CompanyArena, company_id: &str) -> Vec<String> {
    let target = arena.lookup(company_id).unwrap();
    arena
        .path_from_root(target)
        .unwrap()
        .iter()
        .map(|&idx| arena.get(idx).unwrap().company.id.clone())
        .collect()
}

#[rstest]
#[case("comp5", &["comp0", "comp1", "comp5"])]
#[case("comp4", &["comp0", "comp1", "comp3", "comp4"])]
#[case("comp2", &["comp0", "comp2"])]
#[case("comp0", &["comp0"])]
fn given_target_when_building_path_then_runs_root_first_to_target(
    arena: CompanyArena,
    #[case] company_id: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(path_ids(&arena, company_id), expected);
}

#[rstest]
fn given_any_path_when_walking_pairs_then_each_step_is_parent_to_child(arena: CompanyArena) {
    for company_id in ["comp2", "comp4", "comp5"] {
        let target = arena.lookup(company_id).unwrap();
        let path = arena.path_from_root(target).unwrap();

        for pair in path.windows(2) {
            let (parent, child) = (pair[0], pair[1]);
            assert_eq!(arena.get(child).unwrap().parent, Some(parent));
            assert!(arena.sorted_children(parent).contains(&child));
        }

        let front = path.first().copied().unwrap();
        assert!(arena.get(front).unwrap().company.parent_id.is_empty());
        assert_eq!(path.last().copied(), Some(target));
    }
}
