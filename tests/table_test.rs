use lembar::{
    storage::table::Table,
    types::{ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_ROWS, error::DatabaseError, row::Row},
};

fn sample_row(i: usize) -> Row {
    Row::new(i as i32, format!("user{}", i), format!("user{}@test.com", i))
}

fn fill_table(table: &mut Table, count: usize) {
    for i in 1..=count {
        table.insert(&sample_row(i)).expect("insert within capacity");
    }
}

#[test]
fn test_row_slot_arithmetic() {
    assert_eq!(Table::row_slot(0), (0, 0));
    assert_eq!(Table::row_slot(1), (0, ROW_SIZE));
    assert_eq!(Table::row_slot(ROWS_PER_PAGE - 1), (0, (ROWS_PER_PAGE - 1) * ROW_SIZE));
    // First row of the second page starts back at offset zero.
    assert_eq!(Table::row_slot(ROWS_PER_PAGE), (1, 0));
    assert_eq!(Table::row_slot(TABLE_MAX_ROWS - 1), (99, (ROWS_PER_PAGE - 1) * ROW_SIZE));
}

#[test]
fn test_insert_increments_row_count() {
    let mut table = Table::new();
    assert_eq!(table.row_count(), 0);
    fill_table(&mut table, 3);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn test_scan_preserves_insertion_order() {
    let mut table = Table::new();
    // Spill well past one page so the scan crosses page boundaries.
    let n = ROWS_PER_PAGE * 3 + 5;
    fill_table(&mut table, n);

    let rows: Vec<Row> = table
        .scan()
        .collect::<Result<_, _>>()
        .expect("scan decodes every slot");
    assert_eq!(rows.len(), n);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(*row, sample_row(i + 1));
    }
}

#[test]
fn test_scan_is_restartable() {
    let mut table = Table::new();
    fill_table(&mut table, 5);

    let first: Vec<Row> = table.scan().collect::<Result<_, _>>().unwrap();
    let second: Vec<Row> = table.scan().collect::<Result<_, _>>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scan_of_empty_table_is_empty() {
    let table = Table::new();
    assert_eq!(table.scan().count(), 0);
}

#[test]
fn test_capacity_boundary() {
    let mut table = Table::new();
    fill_table(&mut table, TABLE_MAX_ROWS);
    assert_eq!(table.row_count(), TABLE_MAX_ROWS);
    assert!(table.is_full());

    let overflow = table.insert(&sample_row(TABLE_MAX_ROWS + 1));
    assert!(matches!(overflow, Err(DatabaseError::TableFull)));
    assert_eq!(table.row_count(), TABLE_MAX_ROWS);

    // Further inserts keep failing identically.
    let again = table.insert(&sample_row(TABLE_MAX_ROWS + 2));
    assert!(matches!(again, Err(DatabaseError::TableFull)));
    assert_eq!(table.row_count(), TABLE_MAX_ROWS);

    // The full table still reads back intact, first and last rows included.
    let rows: Vec<Row> = table.scan().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), TABLE_MAX_ROWS);
    assert_eq!(rows[0], sample_row(1));
    assert_eq!(rows[TABLE_MAX_ROWS - 1], sample_row(TABLE_MAX_ROWS));
}

#[test]
fn test_duplicate_ids_are_plain_appends() {
    // Duplicate ids are not rejected or deduplicated: the table is
    // append-only with no key awareness.
    let mut table = Table::new();
    table.insert(&Row::new(1, "first", "a@test.com")).unwrap();
    table.insert(&Row::new(1, "second", "b@test.com")).unwrap();

    let rows: Vec<Row> = table.scan().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].username, "first");
    assert_eq!(rows[1].username, "second");
}
