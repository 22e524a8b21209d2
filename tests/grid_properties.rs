use stampgrid::{
    compute_card_size, compute_grid, Error, GridSpec, LayoutConfig, RequiredCount, StampCardView,
    MAX_REQUIRED_STAMPS,
};

#[test]
fn grid_holds_every_stamp() {
    for n in 1..=300i64 {
        let g = compute_grid(n).expect("valid count");
        assert!(g.rows >= 1 && g.columns >= 1);
        assert!(g.area() >= n as u64, "n={} grid={}", n, g);
    }
}

#[test]
fn grid_area_is_minimal() {
    for n in 1..=120u64 {
        let g = compute_grid(n as i64).unwrap();
        for r in 1..=n {
            for c in 1..=n {
                if r * c >= n {
                    assert!(r * c >= g.area(), "n={} beaten by {}x{}", n, r, c);
                }
            }
        }
    }
}

#[test]
fn grid_is_deterministic() {
    for n in 1..=64i64 {
        let first = compute_grid(n).unwrap();
        for _ in 0..5 {
            assert_eq!(compute_grid(n).unwrap(), first);
        }
    }
}

#[test]
fn concrete_scenarios() {
    let cases = [(1, 1, 1), (6, 2, 3), (7, 1, 7), (8, 2, 4), (12, 3, 4)];
    for (n, rows, columns) in cases {
        assert_eq!(compute_grid(n).unwrap(), GridSpec { rows, columns }, "n={}", n);
    }
}

#[test]
fn invalid_counts_are_rejected() {
    assert!(matches!(compute_grid(0), Err(Error::InvalidArgument(_))));
    assert!(matches!(compute_grid(-1), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        RequiredCount::try_from(1.5_f64),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        "1.5".parse::<RequiredCount>(),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn card_size_is_monotonic() {
    for rows in 1..=12u32 {
        for columns in 1..=12u32 {
            let base = compute_card_size(GridSpec { rows, columns });
            let wider = compute_card_size(GridSpec {
                rows,
                columns: columns + 1,
            });
            let taller = compute_card_size(GridSpec {
                rows: rows + 1,
                columns,
            });
            assert!(wider.width >= base.width && wider.height >= base.height);
            assert!(taller.width >= base.width && taller.height >= base.height);
        }
    }
}

#[test]
fn largest_allowed_count_lays_out() {
    let required = RequiredCount::new(MAX_REQUIRED_STAMPS).unwrap();
    let view = StampCardView::new("Hirds", "drink", 0, required, &LayoutConfig::default());
    assert_eq!(view.grid, GridSpec { rows: 100, columns: 100 });
    assert_eq!(view.cells.iter().map(Vec::len).sum::<usize>(), 10_000);

    let over = i64::from(MAX_REQUIRED_STAMPS) + 1;
    assert!(matches!(compute_grid(over), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        compute_grid(400_000_000),
        Err(Error::InvalidArgument(_))
    ));
}
