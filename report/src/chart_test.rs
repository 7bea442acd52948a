use crate::chart::{format_value, grid_step, render};
use crate::data::CONSOLIDATED;
use crate::report::{GroupTable, GROUPS};
use std::fs;

// first eight bytes of any valid PNG file
const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
pub fn every_group_renders_a_nonempty_png() {
    let dir = tempfile::tempdir().unwrap();

    for group in GROUPS.iter() {
        let table = GroupTable::build(group, &CONSOLIDATED).unwrap();
        let path = render(&table, dir.path()).unwrap();

        assert_eq!(path, dir.path().join(group.file_name));

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
    }
}

#[test]
pub fn rerendering_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let table = GroupTable::build(&GROUPS[0], &CONSOLIDATED).unwrap();

    render(&table, first.path()).unwrap();
    render(&table, second.path()).unwrap();

    let a = fs::read(first.path().join(GROUPS[0].file_name)).unwrap();
    let b = fs::read(second.path().join(GROUPS[0].file_name)).unwrap();
    assert_eq!(a, b);
}

#[test]
pub fn value_labels_print_the_literal_values() {
    assert_eq!(format_value(14870.0), "14870");
    assert_eq!(format_value(1.0), "1");
    assert_eq!(format_value(2.5), "2.5");
}

#[test]
pub fn gridline_steps_follow_the_ladder() {
    assert_eq!(grid_step(17100.5), 5000.0);
    assert_eq!(grid_step(200.0), 50.0);
    assert_eq!(grid_step(3.45), 1.0);
}
