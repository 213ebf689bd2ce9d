use {
    ferry_testing::{TestBuilder, TestSuite},
    ferry_types::{Addr, ResultExt, chains},
    proptest::{collection::vec, prelude::*},
};

const ALICE: Addr = Addr::mock(1);
const BOB: Addr = Addr::mock(2);

const INITIAL_BALANCE: u128 = 1_000_000;

fn setup() -> TestSuite {
    let mut suite = TestBuilder::new()
        .set_tracing_level(None)
        .add_locking_chain(chains::ETHEREUM, "Test Token", "TEST", 18)
        .unwrap()
        .add_balance(chains::ETHEREUM, ALICE, INITIAL_BALANCE)
        .unwrap()
        .add_mirroring_chain(chains::POLYGON, "Test Token", "TEST", 18)
        .unwrap()
        .build()
        .unwrap();

    suite.link(chains::ETHEREUM, chains::POLYGON);

    // An unlimited allowance, so outbound legs only ever fail on balance.
    let eth_bridge = suite.bridge(chains::ETHEREUM).addr();
    suite.approve(chains::ETHEREUM, ALICE, eth_bridge, u128::MAX);

    suite
}

/// Replay a sequence of transfers, some of which overdraw and fail, and check
/// after every step that no tokens were created or destroyed overall.
fn check_conservation(ops: Vec<(bool, u128)>) -> Result<(), TestCaseError> {
    let mut suite = setup();

    for (outbound, amount) in ops {
        if outbound {
            let balance = suite.query_balance(chains::ETHEREUM, ALICE).unwrap();
            let transfer =
                suite.transfer(chains::ETHEREUM, ALICE, ALICE, chains::POLYGON, BOB, amount);

            if amount <= balance {
                transfer.should_succeed();
            } else {
                transfer.should_fail_with_error("insufficient balance");
            }
        } else {
            let balance = suite.query_balance(chains::POLYGON, BOB).unwrap();
            let transfer =
                suite.transfer(chains::POLYGON, BOB, BOB, chains::ETHEREUM, ALICE, amount);

            if amount <= balance {
                transfer.should_succeed();
            } else {
                transfer.should_fail_with_error("insufficient balance");
            }
        }

        let escrowed = suite.query_escrowed(chains::ETHEREUM).unwrap();
        let minted = suite.query_total_supply(chains::POLYGON).unwrap();

        // Every token in existence on the mirror is backed by escrow, and the
        // collateral books always add back up to the initial balance.
        prop_assert_eq!(escrowed, minted);
        prop_assert_eq!(
            suite.query_balance(chains::ETHEREUM, ALICE).unwrap() + escrowed,
            INITIAL_BALANCE
        );
        prop_assert_eq!(suite.query_balance(chains::POLYGON, BOB).unwrap(), minted);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    #[test]
    fn escrow_always_matches_minted_supply(ops in vec((any::<bool>(), 1u128..=100_000), 1..20)) {
        check_conservation(ops)?;
    }
}
