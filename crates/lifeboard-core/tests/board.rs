use lifeboard_core::{Board, BoardError, CountingRenderer, RenderError, Renderer, Vertex};

const CANVAS: u32 = 640;

fn board_with(dimension: usize, live: &[(usize, usize)]) -> Board<CountingRenderer> {
    Board::from_fn(dimension, CountingRenderer::new(CANVAS), |x, y| {
        live.contains(&(x, y))
    })
    .unwrap()
}

fn live_cells(board: &Board<CountingRenderer>) -> Vec<(usize, usize)> {
    board
        .cells()
        .filter(|c| c.is_alive())
        .map(|c| (c.x(), c.y()))
        .collect()
}

fn assert_coordinates_match_positions(board: &Board<CountingRenderer>) {
    for x in 0..board.dimension() {
        for y in 0..board.dimension() {
            let cell = board.cell(x, y).unwrap();
            assert_eq!((cell.x(), cell.y()), (x, y));
        }
    }
}

#[test]
fn corner_cell_sees_across_both_edges() {
    let n = 8;
    let board = board_with(n, &[(n - 1, n - 1), (n - 1, 0), (0, n - 1)]);
    assert_eq!(board.live_neighbors(0, 0), Some(3));

    let diagonal_only = board_with(n, &[(n - 1, n - 1)]);
    assert_eq!(diagonal_only.live_neighbors(0, 0), Some(1));
}

#[test]
fn neighbor_count_ignores_the_cell_itself() {
    let board = board_with(5, &[(2, 2)]);
    assert_eq!(board.live_neighbors(2, 2), Some(0));
    assert_eq!(board.live_neighbors(1, 1), Some(1));
    assert_eq!(board.live_neighbors(0, 0), Some(0));
}

#[test]
fn neighbor_count_is_none_off_the_board() {
    let board = board_with(4, &[(0, 0)]);
    assert_eq!(board.live_neighbors(4, 0), None);
    assert_eq!(board.live_neighbors(0, 4), None);
    assert_eq!(board.live_neighbors(3, 3), Some(1));
}

#[test]
fn tiny_boards_count_wrapped_neighbours_repeatedly() {
    // every offset wraps back onto the single cell
    let mut single = board_with(1, &[(0, 0)]);
    assert_eq!(single.live_neighbors(0, 0), Some(8));
    single.advance_generation();
    assert_eq!(single.population(), 0);

    // on a 2-torus the diagonal neighbour is reached from four offsets
    let pair = board_with(2, &[(1, 1)]);
    assert_eq!(pair.live_neighbors(0, 0), Some(4));
    assert_eq!(pair.live_neighbors(1, 0), Some(2));
    assert_eq!(pair.live_neighbors(1, 1), Some(0));
}

#[test]
fn fully_alive_board_counts_eight_everywhere() {
    let board = Board::from_fn(6, CountingRenderer::new(CANVAS), |_, _| true).unwrap();
    for x in 0..6 {
        for y in 0..6 {
            assert_eq!(board.live_neighbors(x, y), Some(8));
        }
    }
}

#[test]
fn all_dead_board_is_a_fixed_point() {
    let mut board = board_with(10, &[]);
    for _ in 0..5 {
        board.advance_generation();
    }
    assert_eq!(board.population(), 0);
    assert_eq!(board.generation(), 5);
}

#[test]
fn all_alive_board_dies_out() {
    let mut board = Board::from_fn(6, CountingRenderer::new(CANVAS), |_, _| true).unwrap();
    board.advance_generation();
    assert_eq!(board.population(), 0);
    assert_eq!(board.last_stats().deaths, 36);
    board.advance_generation();
    assert_eq!(board.population(), 0);
}

#[test]
fn block_is_a_still_life() {
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let mut board = board_with(6, &block);
    let before = board.alive_mask();
    for _ in 0..4 {
        board.advance_generation();
        assert_eq!(board.alive_mask(), before, "block changed:\n{}", board);
    }
}

#[test]
fn block_survives_across_the_wrap() {
    let n = 6;
    let block = [(n - 1, n - 1), (n - 1, 0), (0, n - 1), (0, 0)];
    let mut board = board_with(n, &block);
    let before = board.alive_mask();
    board.advance_generation();
    assert_eq!(board.alive_mask(), before, "wrapped block changed:\n{}", board);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = [(3, 4), (4, 4), (5, 4)];
    let vertical = [(4, 3), (4, 4), (4, 5)];
    let mut board = board_with(9, &horizontal);
    let start = board.alive_mask();

    board.advance_generation();
    let mut live = live_cells(&board);
    live.sort();
    assert_eq!(live, vertical, "after one generation:\n{}", board);
    assert_eq!(board.last_stats().births, 2);
    assert_eq!(board.last_stats().deaths, 2);

    board.advance_generation();
    assert_eq!(board.alive_mask(), start, "after two generations:\n{}", board);
}

#[test]
fn glider_wraps_around_the_torus() {
    // A glider moves one cell diagonally every 4 generations
    let n = 8;
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut board = board_with(n, &glider);
    let start = board.alive_mask();
    for _ in 0..4 * n {
        board.advance_generation();
        assert_eq!(board.population(), 5);
    }
    assert_eq!(board.alive_mask(), start, "glider did not return:\n{}", board);
}

#[test]
fn update_does_not_depend_on_visiting_order() {
    // Cells visited early must not leak their next state into later counts
    let mut board = board_with(5, &[(1, 0), (1, 1), (1, 2)]);
    board.advance_generation();
    let mut live = live_cells(&board);
    live.sort();
    assert_eq!(live, vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn advancing_is_deterministic() {
    let first = Board::seeded(16, CountingRenderer::new(CANVAS), 0.3, 99).unwrap();
    let mut a = Board::from_fn(16, CountingRenderer::new(CANVAS), |x, y| {
        first.is_alive(x, y)
    })
    .unwrap();
    let mut b = Board::from_fn(16, CountingRenderer::new(CANVAS), |x, y| {
        first.is_alive(x, y)
    })
    .unwrap();

    for _ in 0..10 {
        a.advance_generation();
        b.advance_generation();
        assert_eq!(a.alive_mask(), b.alive_mask());
    }
}

#[test]
fn coordinates_never_move() {
    let mut board = Board::seeded(12, CountingRenderer::new(CANVAS), 0.4, 3).unwrap();
    assert_coordinates_match_positions(&board);
    for _ in 0..6 {
        board.advance_generation();
        board.render().unwrap();
        assert_coordinates_match_positions(&board);
    }
}

#[test]
fn render_draws_only_live_cells() {
    let live = [(0, 0), (3, 3), (4, 1), (7, 7)];
    let mut board = board_with(8, &live);
    board.render().unwrap();

    let renderer = board.renderer();
    assert_eq!(renderer.frames(), 1);
    assert_eq!(renderer.frame_draws().len(), live.len());
    assert!(renderer.frame_draws().iter().all(|&(_, count)| count == 6));

    let drawn: Vec<usize> = renderer.frame_draws().iter().map(|&(h, _)| h).collect();
    for &(x, y) in &live {
        assert!(drawn.contains(&board.cell(x, y).unwrap().handle()));
    }
}

#[test]
fn render_of_empty_board_still_brackets_a_frame() {
    let mut board = board_with(4, &[]);
    board.render().unwrap();
    assert_eq!(board.renderer().frames(), 1);
    assert!(board.renderer().frame_draws().is_empty());
}

#[test]
fn render_does_not_change_state() {
    let mut board = Board::seeded(10, CountingRenderer::new(CANVAS), 0.5, 11).unwrap();
    let before = board.alive_mask();
    board.render().unwrap();
    board.render().unwrap();
    assert_eq!(board.alive_mask(), before);
    assert_eq!(board.generation(), 0);
}

#[test]
fn one_drawable_per_cell_with_shared_geometry_rules() {
    let board = board_with(4, &[]);
    let renderer = board.renderer();
    assert_eq!(renderer.drawables().len(), 16);
    assert!(renderer.drawables().iter().all(|quad| quad.len() == 6));
    let handles: Vec<usize> = board.cells().map(|c| c.handle()).collect();
    assert_eq!(handles, (0..16).collect::<Vec<_>>());
}

#[test]
fn display_prints_highest_row_first() {
    let board = board_with(3, &[(0, 2), (2, 0)]);
    assert_eq!(board.to_string(), "#..\n...\n..#\n");
}

#[test]
fn rejects_empty_board() {
    let result = Board::from_fn(0, CountingRenderer::new(CANVAS), |_, _| false);
    assert!(matches!(result, Err(BoardError::InvalidDimension)));
}

#[test]
fn rejects_threshold_outside_unit_interval() {
    for threshold in [-0.1, 1.1, f32::NAN] {
        let result = Board::seeded(4, CountingRenderer::new(CANVAS), threshold, 1);
        assert!(matches!(result, Err(BoardError::InvalidThreshold(_))));
    }
}

#[test]
fn canvas_failure_aborts_construction() {
    let result = Board::seeded(4, CountingRenderer::new(0), 0.5, 1);
    assert!(matches!(
        result,
        Err(BoardError::Render(RenderError::CanvasUnavailable(_)))
    ));
}

/// Renderer that runs out of drawables after a fixed budget
struct LimitedRenderer {
    remaining: usize,
    fail_draws: bool,
}

impl Renderer for LimitedRenderer {
    type Handle = u32;

    fn canvas_size(&self) -> Result<u32, RenderError> {
        Ok(CANVAS)
    }

    fn create_drawable(&mut self, _geometry: &[Vertex]) -> Result<u32, RenderError> {
        if self.remaining == 0 {
            return Err(RenderError::DrawableCreation("out of buffers".to_string()));
        }
        self.remaining -= 1;
        Ok(self.remaining as u32)
    }

    fn draw(&mut self, _handle: u32, _vertex_count: u32) -> Result<(), RenderError> {
        if self.fail_draws {
            return Err(RenderError::Draw("device lost".to_string()));
        }
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

#[test]
fn drawable_failure_aborts_construction() {
    let renderer = LimitedRenderer {
        remaining: 10,
        fail_draws: false,
    };
    let result = Board::from_fn(4, renderer, |_, _| true);
    assert!(matches!(
        result,
        Err(BoardError::Render(RenderError::DrawableCreation(_)))
    ));
}

#[test]
fn draw_failure_propagates_from_render() {
    let renderer = LimitedRenderer {
        remaining: 16,
        fail_draws: true,
    };
    let mut dead = Board::from_fn(4, renderer, |_, _| false).unwrap();
    assert!(dead.render().is_ok());

    let mut board = Board::from_fn(
        4,
        LimitedRenderer {
            remaining: 16,
            fail_draws: true,
        },
        |x, y| x == y,
    )
    .unwrap();
    assert!(matches!(board.render(), Err(RenderError::Draw(_))));
}
