use cnft_tree_params::{
    constants::MAX_ACCOUNT_SIZE, estimate_account_size, is_valid_depth_size_pair,
    TreeConfigCandidate, TreeParamsError, ValidationError, ValidationWarning,
    ALL_DEPTH_SIZE_PAIRS,
};

#[test]
fn test_table_has_26_pairs() {
    assert_eq!(ALL_DEPTH_SIZE_PAIRS.len(), 26);
    for pair in ALL_DEPTH_SIZE_PAIRS.iter() {
        assert!(is_valid_depth_size_pair(pair.max_depth, pair.max_buffer_size));
    }
}

/// Every pair outside the table is reported as an invalid combination.
#[test]
fn test_invalid_combinations_rejected() {
    for max_depth in 0..=32 {
        for max_buffer_size in [1u32, 8, 16, 32, 64, 100, 128, 256, 512, 1024, 2048, 4096] {
            let result = TreeConfigCandidate::new(max_depth, max_buffer_size, 0).validate();
            let expected = ValidationError::InvalidDepthSizePair {
                max_depth,
                max_buffer_size,
            };
            if is_valid_depth_size_pair(max_depth, max_buffer_size) {
                if let Err(errors) = result {
                    assert!(!errors.contains(&expected));
                }
            } else {
                let errors = result.unwrap_err();
                assert!(errors.contains(&expected), "{:?}", errors);
            }
        }
    }
}

#[test]
fn test_canopy_not_below_depth() {
    let errors = TreeConfigCandidate::new(14, 64, 14).validate().unwrap_err();
    assert_eq!(
        errors.errors(),
        &[ValidationError::CanopyNotBelowDepth {
            canopy_depth: 14,
            max_depth: 14
        }]
    );

    for pair in ALL_DEPTH_SIZE_PAIRS.iter() {
        for canopy_depth in [pair.max_depth, pair.max_depth + 1] {
            let errors =
                TreeConfigCandidate::new(pair.max_depth, pair.max_buffer_size, canopy_depth.into())
                    .validate()
                    .unwrap_err();
            assert!(errors.contains(&ValidationError::CanopyNotBelowDepth {
                canopy_depth: canopy_depth.into(),
                max_depth: pair.max_depth,
            }));
        }
    }
}

#[test]
fn test_power_of_two_buffer() {
    assert!(TreeConfigCandidate::new(14, 64, 0).validate().is_ok());
    let errors = TreeConfigCandidate::new(14, 100, 0).validate().unwrap_err();
    assert!(errors.contains(&ValidationError::BufferNotPowerOfTwo(100)));
}

/// All checks run, the first one is the pair membership.
#[test]
fn test_all_errors_reported_in_order() {
    let errors = TreeConfigCandidate::new(14, 100, 18).validate().unwrap_err();
    assert_eq!(
        errors.errors(),
        &[
            ValidationError::InvalidDepthSizePair {
                max_depth: 14,
                max_buffer_size: 100
            },
            ValidationError::CanopyNotBelowDepth {
                canopy_depth: 18,
                max_depth: 14
            },
            ValidationError::CanopyTooDeep(18),
            ValidationError::BufferNotPowerOfTwo(100),
        ]
    );
    assert_eq!(errors.remaining(), 3);
    assert_eq!(errors.messages().len(), 4);
    assert!(errors.to_string().ends_with("(and 3 more errors)"));
}

#[test]
fn test_advisory_warnings_do_not_block() {
    let validated = TreeConfigCandidate::new(30, 1024, 17).validate().unwrap();
    assert_eq!(
        validated.warnings,
        vec![ValidationWarning::LeafCapacityExceeded { capacity: 1 << 30 }]
    );

    let validated = TreeConfigCandidate::new(24, 64, 5).validate().unwrap();
    assert_eq!(
        validated.warnings,
        vec![ValidationWarning::ExpensiveProofs {
            max_depth: 24,
            canopy_depth: 5
        }]
    );

    let validated = TreeConfigCandidate::new(20, 64, 5).validate().unwrap();
    assert!(validated.warnings.is_empty());
}

#[test]
fn test_warnings_travel_with_errors() {
    let errors = TreeConfigCandidate::new(30, 100, 3).validate().unwrap_err();
    assert_eq!(errors.warnings().len(), 2);
}

#[test]
fn test_smallest_tree_size() {
    let validated = TreeConfigCandidate::new(3, 8, 0).validate().unwrap();
    let estimate = validated.config.estimate().unwrap();
    assert_eq!(estimate.size_bytes, 64 + 512 + 256);
    assert_eq!(estimate, estimate_account_size(3, 8, 0).unwrap());
}

/// Oversized trees never produce an estimate.
#[test]
fn test_oversized_trees_flagged() {
    for pair in ALL_DEPTH_SIZE_PAIRS.iter() {
        for canopy_depth in 0..=17u32 {
            match estimate_account_size(pair.max_depth, pair.max_buffer_size, canopy_depth) {
                Ok(estimate) => assert!(estimate.size_bytes <= MAX_ACCOUNT_SIZE),
                Err(TreeParamsError::AccountTooLarge { size, max }) => {
                    assert!(size > max);
                    assert_eq!(max, MAX_ACCOUNT_SIZE);
                }
                Err(e) => panic!("unexpected error {:?}", e),
            }
        }
    }
    assert!(estimate_account_size(24, 2048, 10).is_err());
}

#[test]
fn test_validated_tree_serializes() {
    let validated = TreeConfigCandidate::new(14, 256, 8).validate().unwrap();
    let json = serde_json::to_value(&validated).unwrap();
    assert_eq!(json["config"]["max_depth"], 14);
    assert_eq!(json["config"]["max_buffer_size"], 256);
    assert_eq!(json["config"]["canopy_depth"], 8);
}
