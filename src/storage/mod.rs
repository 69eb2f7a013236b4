pub mod read_palette_csv;
