//! Tests for command-line parsing and the indexing session driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use grhindexer::IndexerError;
    use grhindexer::engine::OutOfGridPolicy;
    use grhindexer::io::cli::{Cli, Indexer, parse_point, parse_size, parse_tile};
    use grhindexer::io::configuration::{
        DEFAULT_GRAPHIC_SHEET, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    };
    use grhindexer::spatial::TileCoordinate;
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};

    fn write_sheet(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("sheet.png");
        RgbaImage::from_pixel(width, height, Rgba([20, 40, 60, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn cli_for(image: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "program".to_string(),
            image.to_string_lossy().into_owned(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the required image argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "sheet.png"]);

        assert_eq!(cli.image, PathBuf::from("sheet.png"));
        assert_eq!(cli.tile_width, DEFAULT_TILE_WIDTH);
        assert_eq!(cli.tile_height, DEFAULT_TILE_HEIGHT);
        assert_eq!(cli.graphic, DEFAULT_GRAPHIC_SHEET);
        assert_eq!(cli.frame_delay, 1);
        assert_eq!(cli.initial_index, 1);
        assert!(cli.select.is_empty());
        assert!(cli.click.is_empty());
        assert_eq!(cli.container, None);
        assert_eq!(cli.output, None);
        assert!(!cli.quiet);
        assert_eq!(cli.out_of_grid_policy(), OutOfGridPolicy::Accept);
    }

    // Tests CLI parsing with every option, including negative values
    // Verified by removing allow_negative_numbers from the offsets
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "sheet.png",
            "-W",
            "16",
            "-H",
            "24",
            "-x",
            "-8",
            "-y",
            "4",
            "-g",
            "12",
            "-d",
            "9",
            "-i",
            "-2",
            "-s",
            "0,0",
            "--select",
            "-1,3",
            "-c",
            "10.5,20",
            "--container",
            "640x480",
            "--ignore-out-of-grid",
            "-o",
            "out.txt",
            "--overlay",
            "overlay.png",
            "-q",
        ]);

        assert_eq!((cli.tile_width, cli.tile_height), (16, 24));
        assert_eq!((cli.offset_x, cli.offset_y), (-8, 4));
        assert_eq!(cli.graphic, 12);
        assert_eq!(cli.frame_delay, 9);
        assert_eq!(cli.initial_index, -2);
        assert_eq!(
            cli.select,
            vec![TileCoordinate::new(0, 0), TileCoordinate::new(-1, 3)]
        );
        assert_eq!(cli.click, vec![[10.5, 20.0]]);
        assert_eq!(cli.container, Some((640, 480)));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.overlay, Some(PathBuf::from("overlay.png")));
        assert!(cli.quiet);
        assert_eq!(cli.out_of_grid_policy(), OutOfGridPolicy::Ignore);

        let settings = cli.settings();
        assert_eq!(settings.tile_width, 16);
        assert_eq!(settings.export_config().frame_delay(), 4);
        assert_eq!(settings.export_config().starting_index(), 1);
    }

    // Tests invalid option values are rejected at parse time
    // Verified by accepting malformed coordinates
    #[test]
    fn test_cli_rejects_malformed_values() {
        assert!(Cli::try_parse_from(["program", "sheet.png", "-s", "1;2"]).is_err());
        assert!(Cli::try_parse_from(["program", "sheet.png", "-c", "a,b"]).is_err());
        assert!(Cli::try_parse_from(["program", "sheet.png", "--container", "640"]).is_err());
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests the value parsers directly
    // Verified by swapping the parsed components
    #[test]
    fn test_value_parsers() {
        assert_eq!(parse_tile("4,2"), Ok(TileCoordinate::new(4, 2)));
        assert!(parse_tile("4").is_err());

        assert_eq!(parse_point("1.5, -2"), Ok([1.5, -2.0]));
        assert!(parse_point("1.5").is_err());

        assert_eq!(parse_size("320x200"), Ok((320, 200)));
        assert_eq!(parse_size("320X200"), Ok((320, 200)));
        assert!(parse_size("-1x200").is_err());
    }

    // Tests selections and clicks are applied to the built session
    // Verified by skipping the click arguments
    #[test]
    fn test_build_tiler_applies_selection() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sheet(dir.path(), 128, 64);
        let cli = cli_for(
            &image,
            &["-s", "0,0", "-s", "1,0", "--container", "256x256", "-c", "200,70"],
        );

        let tiler = Indexer::new(cli).build_tiler().unwrap();

        assert_eq!(tiler.grid().image_width, 128);
        assert_eq!(tiler.grid().image_height, 64);
        assert_eq!(tiler.selection().len(), 3);
        assert!(tiler.selection().contains(TileCoordinate::new(3, 1)));
    }

    // Tests the ignore flag drops out-of-grid selections
    // Verified by not forwarding the policy to the session
    #[test]
    fn test_build_tiler_ignores_out_of_grid() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sheet(dir.path(), 64, 64);
        let cli = cli_for(&image, &["-s", "5,5", "-s", "1,1", "--ignore-out-of-grid"]);

        let tiler = Indexer::new(cli).build_tiler().unwrap();

        assert_eq!(tiler.selection().len(), 1);
        assert!(tiler.selection().contains(TileCoordinate::new(1, 1)));
    }

    // Tests the export file holds exactly the compiled lines
    // Verified by appending a trailing newline to file output
    #[test]
    fn test_process_writes_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sheet(dir.path(), 64, 64);
        let output = dir.path().join("out").join("grh.txt");
        let output_arg = output.to_string_lossy().into_owned();
        let cli = cli_for(
            &image,
            &["-g", "1", "-s", "0,1", "-s", "1,0", "-s", "0,0", "-o", &output_arg],
        );

        Indexer::new(cli).process().unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Grh1=1-1-0-0-32-32\nGrh2=1-1-1-0-32-32\nGrh3=1-1-0-1-32-32\nGrh4=2-1-2-1\nGrh5=1-3-1"
        );
    }

    // Tests an empty selection writes no export
    // Verified by writing an empty file
    #[test]
    fn test_process_without_selection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sheet(dir.path(), 64, 64);
        let output = dir.path().join("grh.txt");
        let output_arg = output.to_string_lossy().into_owned();
        let cli = cli_for(&image, &["-s", "0,0", "-s", "0,0", "-o", &output_arg]);

        Indexer::new(cli).process().unwrap();

        assert!(!output.exists());
    }

    // Tests the overlay is rendered at the source size
    // Verified by saving the unmodified source
    #[test]
    fn test_process_writes_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sheet(dir.path(), 64, 32);
        let overlay = dir.path().join("overlay.png");
        let output = dir.path().join("grh.txt");
        let overlay_arg = overlay.to_string_lossy().into_owned();
        let output_arg = output.to_string_lossy().into_owned();
        let cli = cli_for(
            &image,
            &["-s", "1,0", "--overlay", &overlay_arg, "-o", &output_arg],
        );

        Indexer::new(cli).process().unwrap();

        let rendered = image::open(&overlay).unwrap().to_rgba8();
        assert_eq!(rendered.dimensions(), (64, 32));
        assert_eq!(*rendered.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert!(output.exists());
    }

    // Tests a missing image is reported with its path
    // Verified by using a placeholder path in the error
    #[test]
    fn test_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let cli = cli_for(&missing, &[]);

        let error = Indexer::new(cli).build_tiler().unwrap_err();
        match error {
            IndexerError::ImageLoad { path, .. } => assert_eq!(path, missing),
            other => unreachable!("Expected ImageLoad error, got {other}"),
        }
    }
}
