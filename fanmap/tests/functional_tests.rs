// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fanmap::prelude::*;
use fanmap::{cons, head, tail, zip, ConcurrentEngine, SequentialEngine};
use fanmap_test_utils::test_data::{numbers, people, person_alice};
use fanmap_test_utils::{expect_application_error, Person, TestError};
use std::convert::Infallible;

#[tokio::test]
async fn test_functional_pipeline_over_people() -> anyhow::Result<()> {
    // Arrange
    let dispatcher = AdaptiveDispatcher::new(DispatchConfig::new(3));

    // Act
    let older = lift(people())
        .map_with(&dispatcher, |person: Person| person.aged(10), None)
        .await?;
    let names = sequential::transform(older, |_, person| {
        Ok::<_, Infallible>(format!("{} ({})", person.name, person.age))
    })?;

    // Assert
    assert_eq!(
        names,
        vec![
            "Alice (35)",
            "Bob (40)",
            "Charlie (45)",
            "Diane (50)",
            "Dave (38)"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_functional_engines_are_interchangeable() -> anyhow::Result<()> {
    async fn run<D: TransformEngine>(engine: &D) -> Result<Vec<i64>, TransformError<TestError>> {
        engine
            .transform(
                numbers(250),
                |_token, index, x| async move {
                    if x < 0 {
                        Err(TestError::at(index))
                    } else {
                        Ok(x * 3)
                    }
                },
                None,
            )
            .await
    }

    let sequential = run(&SequentialEngine).await?;
    let concurrent = run(&ConcurrentEngine).await?;
    let dispatched = run(&AdaptiveDispatcher::with_threshold(100)).await?;

    assert_eq!(sequential, concurrent);
    assert_eq!(concurrent, dispatched);

    Ok(())
}

#[tokio::test]
async fn test_functional_concurrent_then_sequential_composition() -> anyhow::Result<()> {
    // Arrange
    let f = |x: i64| x + 1;
    let g = |x: i64| x * 2;
    let input = numbers(500);

    // Act
    let first = concurrent::transform(
        input.clone(),
        move |_token, _index, x| async move { Ok::<_, Infallible>(f(x)) },
        None,
    )
    .await?;
    let chained = sequential::transform(first, |_, x| Ok::<_, Infallible>(g(x)))?;
    let composed = sequential::transform(input, |_, x| Ok::<_, Infallible>(g(f(x))))?;

    // Assert
    assert_eq!(chained, composed);

    Ok(())
}

#[tokio::test]
async fn test_functional_first_error_surfaces_through_facade() {
    let result = concurrent::transform(
        numbers(100),
        |_token, index, x| async move {
            if index == 42 {
                Err(TestError::new("the answer"))
            } else {
                Ok(x)
            }
        },
        None,
    )
    .await;

    assert_eq!(
        expect_application_error(result),
        (42, TestError::new("the answer"))
    );
}

#[test]
fn test_functional_list_helpers() {
    let everyone = people();

    let first = head(&everyone).unwrap().clone();
    let rest = tail(&everyone).unwrap();
    let rebuilt = cons(first, rest);

    assert_eq!(rebuilt, everyone);
    assert_eq!(
        zip(&rebuilt[..1], &rebuilt[1..2]),
        vec![person_alice(), everyone[1].clone()]
    );
}
