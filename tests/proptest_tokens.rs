use proptest::prelude::*;

use gdpr_obfuscator::token;

proptest! {
    #[test]
    fn tokens_are_deterministic(
        key in proptest::collection::vec(any::<u8>(), 1..64),
        id in "\\PC{1,32}",
        field in "\\PC{1,32}",
        length in 1usize..=64,
    ) {
        let first = token::generate(&key, &id, &field, length).unwrap();
        let second = token::generate(&key, &id, &field, length).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), length);
        prop_assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn distinct_pairs_get_distinct_tokens(
        id_a in "\\PC{1,32}",
        field_a in "\\PC{1,32}",
        id_b in "\\PC{1,32}",
        field_b in "\\PC{1,32}",
    ) {
        prop_assume!((&id_a, &field_a) != (&id_b, &field_b));
        let a = token::generate(b"key", &id_a, &field_a, 64).unwrap();
        let b = token::generate(b"key", &id_b, &field_b, 64).unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn boundary_shifts_never_collide(
        combined in "\\PC{2,32}",
        split_a in 1usize..31,
        split_b in 1usize..31,
    ) {
        // Slice the same string at two different char boundaries; length
        // prefixing must keep the resulting messages apart.
        let boundaries: Vec<usize> = combined.char_indices().map(|(i, _)| i).skip(1).collect();
        prop_assume!(boundaries.len() >= 2);
        let cut_a = boundaries[split_a % boundaries.len()];
        let cut_b = boundaries[split_b % boundaries.len()];
        prop_assume!(cut_a != cut_b);

        let a = token::generate(b"key", &combined[..cut_a], &combined[cut_a..], 64).unwrap();
        let b = token::generate(b"key", &combined[..cut_b], &combined[cut_b..], 64).unwrap();
        prop_assert_ne!(a, b);
    }
}
