use rs_combi_core::generator::cartesian_product::CartesianProductGenerator;
use rs_combi_core::generator::combination::CombinationGenerator;
use rs_combi_core::generator::multiset_combination::MultisetCombinationGenerator;
use rs_combi_core::generator::permutation::PermutationGenerator;
use rs_combi_core::generator::repeated_permutation::RepeatedPermutationGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bind a small input sequence; duplicates would be treated positionally
    let items = vec!["A", "B", "C", "D"];

    // Combinations (nCr): check the closed-form count first, then materialize
    println!("C(4, 3) = {}", CombinationGenerator::<&str>::size(4, 3)?);
    let combinations = CombinationGenerator::new(items.clone())?;
    for row in combinations.compute(3)? {
        println!("combination: {:?}", row);
    }

    // The lazy form walks the same space without materializing it
    let mut lazy = combinations.iterate(2)?;
    println!("first lazy combination: {:?}", lazy.next());

    // Predicate-filtered iteration skips non-matching combinations
    for row in combinations.iterate_filtered(2, |c| c.contains(&"A"))? {
        println!("combination containing A: {:?}", row);
    }

    // Permutations (nPr): same selections, every ordering
    println!("P(4, 2) = {}", PermutationGenerator::<&str>::size(4, 2)?);
    let permutations = PermutationGenerator::new(items.clone())?;
    println!("permutations: {} rows", permutations.compute(2)?.len());

    // Repeated permutations (n^r): r may exceed n here
    let repeated = RepeatedPermutationGenerator::new(vec!["x", "y"])?;
    println!("2^3 = {}", RepeatedPermutationGenerator::<&str>::size(2, 3)?);
    for row in repeated.compute(3)? {
        println!("repeated: {:?}", row);
    }

    // Multiset combinations (nHr): non-decreasing selections with repeats
    let multiset = MultisetCombinationGenerator::new(items.clone())?;
    println!("H(4, 2) = {}", MultisetCombinationGenerator::<&str>::size(4, 2)?);

    // Short-circuiting search: stops at the first match, never enumerates past it
    let found = multiset.first_match(2, |c| c == ["B", "C"])?;
    println!("first match: {:?}", found);

    // Streaming scan with bounded memory: only matches reach the consumer
    multiset.match_execute(2, |c| c[0] == c[1], |c| println!("doubled: {:?}", c))?;

    // Requesting an invalid width fails before any enumeration begins
    match combinations.compute(5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("r = 5 rejected: {}", e),
    }

    // Counts that would not fit in u64 fail explicitly instead of wrapping
    match RepeatedPermutationGenerator::<&str>::size(10, 30) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("10^30 rejected: {}", e),
    }

    // Cartesian product of independently sized lists, last digit fastest
    let product = CartesianProductGenerator::new(vec![
        vec!["A", "B"],
        vec!["X", "Y", "Z"],
    ])?;
    println!("product size = {}", product.size()?);
    for row in product.iterate() {
        println!("pair: {:?}", row);
    }

    Ok(())
}
