//! Property tests for the ordering rules, render reset, and combine spacing.

use objkit_selector::{Category, Part, SelectorBuilder, SelectorError, css};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Map an arbitrary byte onto one of the six appendable categories.
fn part_from(seed: u8, value: &str) -> Part {
    match seed % 6 {
        0 => Part::element(value),
        1 => Part::id(value),
        2 => Part::class(value),
        3 => Part::attr(value),
        4 => Part::pseudo_class(value),
        _ => Part::pseudo_element(value),
    }
}

/// Reference model: the first error a sequence of categories should hit.
fn expected_error(parts: &[Part]) -> Option<SelectorError> {
    let mut last = Category::None;
    for part in parts {
        let category = part.category();
        if category < last {
            return Some(SelectorError::OrderViolation {
                attempted: category,
                last,
            });
        }
        if category == last && category.is_singleton() {
            return Some(SelectorError::DuplicateSingleton { category });
        }
        last = category;
    }
    None
}

#[quickcheck]
fn prop_builder_agrees_with_model(seeds: Vec<(u8, String)>) -> bool {
    let parts: Vec<Part> = seeds.iter().map(|(s, v)| part_from(*s, v)).collect();
    let expected = expected_error(&parts);
    let expected_text: String = parts.iter().map(ToString::to_string).collect();

    match SelectorBuilder::from_parts(parts) {
        Ok(mut builder) => expected.is_none() && builder.render() == expected_text,
        Err(err) => expected == Some(err),
    }
}

#[quickcheck]
fn prop_sorted_sequences_render_concatenation(seeds: Vec<(u8, String)>) -> bool {
    let mut parts: Vec<Part> = seeds.iter().map(|(s, v)| part_from(*s, v)).collect();
    parts.sort_by_key(Part::category);
    parts.dedup_by(|b, a| a.category() == b.category() && a.category().is_singleton());

    let expected: String = parts.iter().map(ToString::to_string).collect();
    SelectorBuilder::from_parts(parts).is_ok_and(|mut b| b.render() == expected)
}

#[quickcheck]
fn prop_backwards_append_is_order_violation(first: u8, second: u8) -> TestResult {
    let first = part_from(first, "a");
    let second = part_from(second, "b");
    if second.category() >= first.category() {
        return TestResult::discard();
    }

    let mut builder = SelectorBuilder::new();
    let _ = builder.push(&first);
    TestResult::from_bool(matches!(
        builder.push(&second),
        Err(SelectorError::OrderViolation { .. })
    ))
}

#[quickcheck]
fn prop_render_resets(seeds: Vec<(u8, String)>) -> bool {
    let mut builder = SelectorBuilder::new();
    for (seed, value) in &seeds {
        let _ = builder.push(&part_from(*seed, value));
    }
    let snapshot = builder.as_str().to_owned();
    let first = builder.render();
    let second = builder.render();
    first == snapshot && second.is_empty() && builder.last_category() == Category::None
}

#[quickcheck]
fn prop_combine_spacing(left: String, combinator: String, right: String, nest: String) -> bool {
    let combined = css::combine(
        css::class(&left).unwrap(),
        combinator.as_str(),
        css::combine(css::id(&right).unwrap(), ">", css::element(&nest).unwrap()),
    )
    .render();
    combined == format!(".{left} {combinator} #{right} > {nest}")
}

#[quickcheck]
fn prop_combine_spacing_nested_left(left: String, right: String, outer: String) -> bool {
    let combined = css::combine(
        css::combine(css::element(&left).unwrap(), "+", css::class(&right).unwrap()),
        outer.as_str(),
        css::pseudo_class("hover").unwrap(),
    )
    .render();
    combined == format!("{left} + .{right} {outer} :hover")
}
