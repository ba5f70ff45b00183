use bolero::check;
use shaprobe::{solve_block, FixedWords, LinearInverter, RoundTarget, State8};

#[test]
fn fuzz_linear_inversion() {
    let inverters = [
        LinearInverter::sigma0(),
        LinearInverter::sigma1(),
        LinearInverter::gamma0(),
        LinearInverter::gamma1(),
    ];

    check!().with_type::<u32>().for_each(|&x| {
        for inv in inverters.iter().flatten() {
            let report = inv.round_trip(x);
            assert!(report.is_perfect(), "Round-trip failed: {report:?}");
            assert_eq!(inv.forward(inv.invert(x)), x);
        }
    });
}

#[test]
fn fuzz_solver_targets() {
    check!()
        .with_type::<(u8, u32, u32)>()
        .for_each(|&(round, first, second)| {
            // Two a-targets, both inside the free window
            let r1 = usize::from(round % 13);
            let targets = [RoundTarget::new(r1).a(first), RoundTarget::new(r1 + 1).a(second)];

            let fixed = FixedWords::new().with_padding_tail().unwrap();
            if let Ok(solved) = solve_block(State8::initial(), &fixed, &targets) {
                assert!(solved.satisfies(&targets), "Targets not met: {targets:?}");
                assert!(solved.has_padding_tail());
            } else {
                panic!("Solvable targets rejected: {targets:?}");
            }
        });
}
