use crate::Outcome;

/// Pair two outcomes, succeeding only when both do.
///
/// When both fail, `t1`'s failure wins.
pub fn combine<T1, T2, F>(t1: Outcome<T1, F>, t2: Outcome<T2, F>) -> Outcome<(T1, T2), F> {
    t1.bind(|v1| t2.map(|v2| (v1, v2)))
}

/// Three-way [`combine`]; the leftmost failure wins.
pub fn combine3<T1, T2, T3, F>(
    t1: Outcome<T1, F>,
    t2: Outcome<T2, F>,
    t3: Outcome<T3, F>,
) -> Outcome<(T1, T2, T3), F> {
    combine(t1, t2).bind(|(v1, v2)| t3.map(|v3| (v1, v2, v3)))
}

/// Four-way [`combine`]; the leftmost failure wins.
pub fn combine4<T1, T2, T3, T4, F>(
    t1: Outcome<T1, F>,
    t2: Outcome<T2, F>,
    t3: Outcome<T3, F>,
    t4: Outcome<T4, F>,
) -> Outcome<(T1, T2, T3, T4), F> {
    combine3(t1, t2, t3).bind(|(v1, v2, v3)| t4.map(|v4| (v1, v2, v3, v4)))
}
