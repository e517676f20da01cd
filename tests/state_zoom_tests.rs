//! Integration tests for optic-driven state, reader and combined computations.

#![forbid(unsafe_code)]

use focal::effect::{
    assign, magnify, modifying, modifying_and_report, queries, query, use_, uses, zoom, zoom_may,
    Reader, Rws, State, StateT,
};
use focal::optics::{compose, ix, lens, traversed, Lens, Snd};
use focal::typeclass::ResultBrand;
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Inventory {
    gold: u32,
    items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct Player {
    name: String,
    inventory: Inventory,
}

type FieldLens<S, A> = Lens<S, S, A, A, fn(&S) -> A, fn(S, A) -> S>;

fn inventory() -> FieldLens<Player, Inventory> {
    lens(
        (|player: &Player| player.inventory.clone()) as fn(&Player) -> Inventory,
        (|player: Player, inventory: Inventory| Player { inventory, ..player })
            as fn(Player, Inventory) -> Player,
    )
}

fn gold() -> FieldLens<Inventory, u32> {
    lens(
        (|inventory: &Inventory| inventory.gold) as fn(&Inventory) -> u32,
        (|inventory: Inventory, gold: u32| Inventory { gold, ..inventory })
            as fn(Inventory, u32) -> Inventory,
    )
}

fn items() -> FieldLens<Inventory, Vec<String>> {
    lens(
        (|inventory: &Inventory| inventory.items.clone()) as fn(&Inventory) -> Vec<String>,
        (|inventory: Inventory, items: Vec<String>| Inventory { items, ..inventory })
            as fn(Inventory, Vec<String>) -> Inventory,
    )
}

fn player() -> Player {
    Player {
        name: String::from("ada"),
        inventory: Inventory {
            gold: 10,
            items: vec![String::from("rope"), String::from("lamp")],
        },
    }
}

// =============================================================================
// State Through Optics
// =============================================================================

#[rstest]
fn use_reads_a_nested_field() {
    let purse: State<Player, u32> = use_(compose(inventory(), gold()));
    assert_eq!(purse.run_state(player()), (10, player()));
}

#[rstest]
fn uses_combines_every_focus() {
    let names: State<Player, String> =
        uses(compose(compose(inventory(), items()), traversed()), |item: String| item);
    assert_eq!(names.eval_state(player()), "ropelamp");
}

#[rstest]
fn assign_then_modify() {
    let program: State<Player, ()> = assign(compose(inventory(), gold()), 100)
        .then(modifying(compose(inventory(), gold()), |coins: u32| coins / 2));
    assert_eq!(program.exec_state(player()).inventory.gold, 50);
}

#[rstest]
fn modifying_and_report_returns_the_new_focus() {
    let earn: State<Player, u32> = modifying_and_report(compose(inventory(), gold()), |coins: u32| coins + 5);
    let (reported, after) = earn.run_state(player());
    assert_eq!(reported, 15);
    assert_eq!(after.inventory.gold, 15);
}

// =============================================================================
// Zoom
// =============================================================================

#[rstest]
fn zoom_runs_a_purse_computation_on_the_player() {
    let spend: State<u32, bool> = State::state(|coins: u32| match coins.checked_sub(4) {
        Some(rest) => (true, rest),
        None => (false, coins),
    });
    let program: State<Player, bool> = zoom(compose(inventory(), gold()), spend);

    let (paid, after) = program.run_state(player());
    assert!(paid);
    assert_eq!(after.inventory.gold, 6);
    assert_eq!(after.name, "ada");
}

#[rstest]
fn zoom_through_a_traversal_visits_every_item() {
    let shout: State<String, Vec<usize>> = State::state(|item: String| (vec![item.len()], item.to_uppercase()));
    let program: State<Player, Vec<usize>> = zoom(compose(compose(inventory(), items()), traversed()), shout);

    let (lengths, after) = program.run_state(player());
    assert_eq!(lengths, vec![4, 4]);
    assert_eq!(after.inventory.items, vec!["ROPE", "LAMP"]);
}

#[rstest]
fn zoom_may_fails_when_any_focus_fails() {
    let withdraw: State<u32, Option<Vec<u32>>> =
        State::state(|coins: u32| (coins.checked_sub(3).map(|rest| vec![rest]), coins.saturating_sub(3)));
    let program: State<Vec<u32>, Option<Vec<u32>>> = zoom_may(traversed(), withdraw);

    assert_eq!(program.run_state(vec![5, 9]), (Some(vec![2, 6]), vec![2, 6]));
    assert_eq!(program.eval_state(vec![5, 1]), None);
}

#[rstest]
fn zoom_over_a_failing_host() {
    let take: StateT<u32, ResultBrand<String>, u32> = StateT::new(|coins: u32| {
        if coins == 0 {
            Err(String::from("empty purse"))
        } else {
            Ok((coins, 0))
        }
    });
    let program: StateT<(char, u32), ResultBrand<String>, u32> = zoom(Snd, take);

    assert_eq!(program.run(('p', 7)), Ok((7, ('p', 0))));
    assert_eq!(program.run(('p', 0)), Err(String::from("empty purse")));
}

proptest! {
    #[test]
    fn prop_zoom_through_ix_touches_one_element(
        values in prop::collection::vec(any::<i16>(), 1..10),
        position in 0usize..12
    ) {
        let double: State<i16, ()> = State::modify(|n: i16| n.wrapping_mul(2));
        let program: State<Vec<i16>, ()> = zoom(ix(position), double);

        let after = program.exec_state(values.clone());
        for (index, (before, now)) in values.iter().zip(after.iter()).enumerate() {
            if index == position {
                prop_assert_eq!(*now, before.wrapping_mul(2));
            } else {
                prop_assert_eq!(now, before);
            }
        }
        prop_assert_eq!(after.len(), values.len());
    }

    #[test]
    fn prop_zoom_get_equals_use(values in prop::collection::vec(any::<u8>(), 0..10)) {
        let via_zoom: State<Vec<u8>, Vec<u8>> = zoom(traversed(), State::gets(|n: &u8| vec![*n]));
        let via_use: State<Vec<u8>, Vec<u8>> = uses(traversed(), |n: u8| vec![n]);
        prop_assert_eq!(via_zoom.run_state(values.clone()), via_use.run_state(values));
    }
}

// =============================================================================
// Reader And Combined
// =============================================================================

#[rstest]
fn query_and_magnify_read_the_environment() {
    let purse: Reader<Inventory, u32> = query(gold());
    let from_player: Reader<Player, u32> = magnify(inventory(), purse);
    assert_eq!(from_player.run_reader(player()), 10);

    let item_count: Reader<Player, Vec<()>> =
        queries(compose(compose(inventory(), items()), traversed()), |_: String| vec![()]);
    assert_eq!(item_count.run_reader(player()).len(), 2);
}

#[rstest]
fn rws_logs_and_updates() {
    let program: Rws<u32, Vec<String>, u32, u32> = Rws::ask().flat_map(|bonus: u32| {
        Rws::modify(move |coins: u32| coins + bonus)
            .then(Rws::tell(vec![format!("bonus {bonus}")]))
            .then(Rws::get())
    });
    assert_eq!(program.run_rws(5, 10), (15, 15, vec![String::from("bonus 5")]));
}
