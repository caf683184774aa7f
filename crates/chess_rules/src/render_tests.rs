use super::*;

const START_WHITE: &str = "\
8 r n b q k b n r
7 p p p p p p p p
6 . . . . . . . .
5 . . . . . . . .
4 . . . . . . . .
3 . . . . . . . .
2 P P P P P P P P
1 R N B Q K B N R
  a b c d e f g h
";

const START_BLACK: &str = "\
1 R N B K Q B N R
2 P P P P P P P P
3 . . . . . . . .
4 . . . . . . . .
5 . . . . . . . .
6 . . . . . . . .
7 p p p p p p p p
8 r n b k q b n r
  h g f e d c b a
";

#[test]
fn test_startpos_from_white() {
    let pos = Position::startpos();
    assert_eq!(diagram(&pos, DiagramOptions::default()), START_WHITE);
}

#[test]
fn test_fixed_black_orientation() {
    let pos = Position::startpos();
    let options = DiagramOptions {
        orientation: Orientation::Black,
        ..Default::default()
    };
    assert_eq!(diagram(&pos, options), START_BLACK);
}

#[test]
fn test_side_to_move_flips() {
    let mut pos = Position::startpos();
    pos.flip_turn();
    assert_eq!(Orientation::SideToMove.viewer(&pos), Side::Black);
    assert_eq!(Orientation::White.viewer(&pos), Side::White);
    assert_eq!(diagram(&pos, DiagramOptions::default()), START_BLACK);
}

#[test]
fn test_without_coordinates() {
    let mut pos = Position::empty(Side::White);
    pos.place(
        Square::parse("a8").unwrap(),
        Piece::new(PieceKind::Rook, Side::Black),
    )
    .unwrap();
    pos.place(
        Square::parse("h1").unwrap(),
        Piece::new(PieceKind::King, Side::White),
    )
    .unwrap();

    let text = diagram(
        &pos,
        DiagramOptions {
            orientation: Orientation::White,
            coordinates: false,
        },
    );
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "r . . . . . . .");
    assert_eq!(lines[7], ". . . . . . . K");
}
