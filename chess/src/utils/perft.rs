use crate::Board;
use crate::core::{Colour, Move};

/// Counts the leaves of the legal move tree of `side` to `depth` plies
pub fn perft(board: &Board, side: Colour, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let move_list = board.all_legal_moves(side);

    if depth == 1 {
        return move_list.len();
    }

    move_list
        .iter()
        .map(|&move_| perft(&board.apply(move_), !side, depth - 1))
        .sum()
}

/// Leaf counts below each legal root move, in generation order
pub fn perft_divide(board: &Board, side: Colour, depth: usize) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    board
        .all_legal_moves(side)
        .into_iter()
        .map(|move_| (move_, perft(&board.apply(move_), !side, depth - 1)))
        .collect()
}

/// Prints a divide table for the position, returning the total node count
pub fn perft_report(board: &Board, side: Colour, depth: usize) -> usize {
    use std::time::Instant;

    println!("=============== PERFT TEST ===============");
    println!("                 Depth: {depth}           ");
    println!("==========================================");

    let start = Instant::now();

    let divide = perft_divide(board, side, depth);

    for (move_, nodes) in &divide {
        println!("              {move_}: {nodes}");
    }

    let total_nodes: usize = divide.iter().map(|(_, nodes)| nodes).sum();
    let time = start.elapsed().as_millis();

    println!("=========================================");
    println!("              Nodes: {total_nodes}       ");
    println!("              Time: {time}ms             ");
    println!("=========================================");

    total_nodes
}
