//! Tests for layout normalization and compositing

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use std::collections::BTreeMap;
    use tilebundle::TilesetError;
    use tilebundle::organize::assigner::{GroupPlan, PlannedTile};
    use tilebundle::organize::layout::assemble_layout;

    const TILE: [u32; 2] = [4, 4];

    fn tile(index: u32, local: [i32; 2], explicit_pos: bool) -> PlannedTile {
        PlannedTile {
            index,
            local,
            explicit_pos,
            filename: format!("room_{:02}_{:02}.png", local[0], local[1]),
            sheet: (index % 2, index / 2),
        }
    }

    fn plan(tiles: Vec<PlannedTile>) -> GroupPlan {
        GroupPlan {
            id: "room".to_string(),
            base_name: "room".to_string(),
            connect: None,
            tiles,
        }
    }

    fn solid_bitmaps(indices: &[u32]) -> BTreeMap<u32, RgbaImage> {
        indices
            .iter()
            .map(|&index| {
                let color = Rgba([index as u8 + 1, 0, 0, 255]);
                (index, RgbaImage::from_pixel(TILE[0], TILE[1], color))
            })
            .collect()
    }

    // Tests a zero-based block keeps its positions and a full grid
    // Verified by shifting positions by the maximum instead
    #[test]
    fn test_zero_based_block_unchanged() {
        let plan = plan(vec![
            tile(0, [0, 0], true),
            tile(1, [1, 0], true),
            tile(2, [0, 1], true),
            tile(3, [1, 1], true),
        ]);
        let bitmaps = solid_bitmaps(&[0, 1, 2, 3]);

        let (canvas, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [2, 2]);
        assert_eq!(canvas.dimensions(), (8, 8));
        for placement in &doc.placed {
            assert_eq!(placement.pos, placement.source_pos);
        }
    }

    // Tests far-flung positions normalize against the minimum corner
    // Verified by normalizing against the origin
    #[test]
    fn test_offset_positions_normalized() {
        let plan = plan(vec![tile(0, [5, 5], true), tile(1, [6, 5], true)]);
        let bitmaps = solid_bitmaps(&[0, 1]);

        let (canvas, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [2, 1]);
        assert_eq!(canvas.dimensions(), (8, 4));
        assert_eq!(doc.placed.first().unwrap().pos, [0, 0]);
        assert_eq!(doc.placed.first().unwrap().source_pos, [5, 5]);
        assert_eq!(doc.placed.get(1).unwrap().pos, [1, 0]);
    }

    // Tests negative positions normalize to a zero-based grid
    // Verified by casting positions to unsigned before the shift
    #[test]
    fn test_negative_positions_normalized() {
        let plan = plan(vec![tile(0, [-2, -1], true), tile(1, [-1, -1], true)]);
        let bitmaps = solid_bitmaps(&[0, 1]);

        let (_, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [2, 1]);
        assert_eq!(doc.placed.first().unwrap().pos, [0, 0]);
        assert_eq!(doc.placed.get(1).unwrap().pos, [1, 0]);
    }

    // Tests a single positioned tile yields a one-cell grid
    // Verified by requiring at least two members
    #[test]
    fn test_single_tile_layout() {
        let plan = plan(vec![tile(0, [7, 3], true)]);
        let bitmaps = solid_bitmaps(&[0]);

        let (canvas, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [1, 1]);
        assert_eq!(canvas.dimensions(), (4, 4));
        assert_eq!(doc.placed.first().unwrap().pos, [0, 0]);
    }

    // Tests each bitmap lands in its own cell with replaced pixels
    // Verified by blending instead of replacing
    #[test]
    fn test_compositing_replaces_cells() {
        let plan = plan(vec![tile(0, [0, 0], true), tile(1, [1, 0], true)]);
        let bitmaps = solid_bitmaps(&[0, 1]);

        let (canvas, _) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([1, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(3, 3), Rgba([1, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(4, 0), Rgba([2, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(7, 3), Rgba([2, 0, 0, 255]));
    }

    // Tests cells with no member stay fully transparent
    // Verified by priming the canvas with an opaque fill
    #[test]
    fn test_uncovered_cells_transparent() {
        let plan = plan(vec![tile(0, [0, 0], true), tile(1, [1, 1], true)]);
        let bitmaps = solid_bitmaps(&[0, 1]);

        let (canvas, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [2, 2]);
        let Rgba([_, _, _, alpha]) = *canvas.get_pixel(5, 1);
        assert_eq!(alpha, 0);
    }

    // Tests members without an explicit position take no part
    // Verified by including every member in the bounding box
    #[test]
    fn test_unpositioned_members_excluded() {
        let plan = plan(vec![tile(0, [0, 0], true), tile(1, [9, 9], false)]);
        let bitmaps = solid_bitmaps(&[0]);

        let (_, doc) = assemble_layout(&plan, &bitmaps, TILE).unwrap().unwrap();

        assert_eq!(doc.grid, [1, 1]);
        assert_eq!(doc.placed.len(), 1);
    }

    // Tests a group with no positioned members yields no layout
    // Verified by returning an empty composite instead
    #[test]
    fn test_no_positioned_members_yields_none() {
        let plan = plan(vec![tile(0, [0, 0], false)]);
        let bitmaps = solid_bitmaps(&[0]);

        let result = assemble_layout(&plan, &bitmaps, TILE).unwrap();

        assert!(result.is_none());
    }

    // Tests two members normalizing to one cell is a fatal error
    // Verified by letting the later member overwrite the earlier
    #[test]
    fn test_colliding_cells_rejected() {
        let plan = plan(vec![tile(0, [2, 2], true), tile(1, [2, 2], true)]);
        let bitmaps = solid_bitmaps(&[0, 1]);

        let result = assemble_layout(&plan, &bitmaps, TILE);

        match result {
            Err(TilesetError::DuplicatePosition {
                group,
                position,
                first,
                second,
            }) => {
                assert_eq!(group, "room");
                assert_eq!(position, [0, 0]);
                assert_eq!(first, 0);
                assert_eq!(second, 1);
            }
            other => panic!("expected DuplicatePosition, got {other:?}"),
        }
    }

    // Tests a missing bitmap surfaces as a catalog error
    // Verified by compositing a blank cell instead
    #[test]
    fn test_missing_bitmap_rejected() {
        let plan = plan(vec![tile(0, [0, 0], true)]);
        let bitmaps = BTreeMap::new();

        let result = assemble_layout(&plan, &bitmaps, TILE);

        assert!(matches!(result, Err(TilesetError::Catalog { .. })));
    }
}
