//! Map operations through the operation log

use grid_engine::{
    map::{new_map_log, LayerKind, MapObject, MapOperation, ObjectIdAllocator},
    Bitmask, LogOptions,
};

fn set_tile(column: i32, row: i32, tile: u32) -> MapOperation {
    MapOperation::SetTile {
        column,
        row,
        selected_tiles: vec![vec![tile]],
    }
}

#[test]
fn test_map_undo_restores_tiles() {
    crate::init_logging();
    let mut log = new_map_log(LogOptions::default());
    log.do_operation(set_tile(-3, -2, 7));
    log.do_operation(set_tile(4, 4, 1));

    assert_eq!(log.current_state().get_tile(-3, -2), Some(7));
    log.undo();
    assert_eq!(log.current_state().get_tile(4, 4), None);
    assert_eq!(log.current_state().get_tile(-3, -2), Some(7));
    log.undo();
    assert_eq!(log.current_state().get_tile(-3, -2), None);
    assert_eq!(log.current_state().bounds(), None);
}

#[test]
fn test_clear_tile_operation() {
    let mut log = new_map_log(LogOptions::default());
    log.do_operation(set_tile(1, 1, 3));
    log.do_operation(MapOperation::SetTile {
        column: 1,
        row: 1,
        selected_tiles: Vec::new(),
    });
    assert_eq!(log.current_state().get_tile(1, 1), None);
    log.undo();
    assert_eq!(log.current_state().get_tile(1, 1), Some(3));
}

#[test]
fn test_object_history_keeps_ids() {
    let mut ids = ObjectIdAllocator::new();
    let mut log = new_map_log(LogOptions::default());

    let mut chest = MapObject::new(&mut ids, 2, 2);
    chest.set_prop("contents", "gold");
    log.do_operation(MapOperation::SetObject {
        object: chest.clone(),
        layer: LayerKind::Interactable,
    });

    chest.set_location(5, 5);
    log.do_operation(MapOperation::SetObject {
        object: chest.clone(),
        layer: LayerKind::Interactable,
    });

    let layer = log.current_state().layer(LayerKind::Interactable).unwrap();
    assert!(layer.object_on_tile(2, 2).is_none());
    assert_eq!(layer.object_on_tile(5, 5).map(MapObject::id), Some(chest.id()));

    log.undo();
    let layer = log.current_state().layer(LayerKind::Interactable).unwrap();
    let restored = layer.object_on_tile(2, 2).unwrap();
    assert_eq!(restored.id(), chest.id());
    assert_eq!(restored.prop("contents"), Some("gold"));

    // ids keep increasing even though the object was undone
    let next = MapObject::new(&mut ids, 0, 0);
    assert!(next.id() > chest.id());
}

#[test]
fn test_multi_tile_block_replays() {
    let mut mask = Bitmask::new((2, 2));
    mask.set((0, 0));
    mask.set((1, 1));
    let op = MapOperation::SetMultiTile {
        column: -1,
        row: -1,
        bitmask: mask,
        selected_tiles: vec![vec![9, 8], vec![7, 6]],
    };

    let mut log = new_map_log(LogOptions {
        snapshot_capacity: 1,
        snapshot_interval: 1,
    });
    log.do_operation(op);
    log.do_operation(set_tile(0, 0, 1));
    log.undo();

    let map = log.current_state();
    assert_eq!(map.get_tile(-1, -1), Some(9));
    assert_eq!(map.get_tile(0, 0), Some(6));
    assert_eq!(map.get_tile(0, -1), None);
    assert_eq!(map.tile_count(), 2);
}
