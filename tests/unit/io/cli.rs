//! Tests for command-line parsing across the three subcommands

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tilebundle::io::cli::{Cli, Command};
    use tilebundle::overview::sheet::LabelMode;

    // Tests slice parsing with only the image argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_slice_parse_minimal_args() {
        let cli = Cli::parse_from(["tilebundle", "slice", "sheet.png"]);

        let Command::Slice(args) = cli.command else {
            panic!("Expected the slice subcommand");
        };
        assert_eq!(args.image, PathBuf::from("sheet.png"));
        assert_eq!(args.tile_w, 16);
        assert_eq!(args.tile_h, 16);
        assert_eq!(args.margin_x, 0);
        assert_eq!(args.margin_y, 0);
        assert_eq!(args.spacing_x, 0);
        assert_eq!(args.spacing_y, 0);
        assert!(args.out.is_none());
        assert!(!args.trim_empty);
        assert!(!args.transparent_white);
    }

    // Tests slice parsing with every flag set
    // Verified by dropping individual argument definitions
    #[test]
    fn test_slice_parse_all_args() {
        let cli = Cli::parse_from([
            "tilebundle",
            "slice",
            "sheet.png",
            "--tile-w",
            "32",
            "--tile-h",
            "24",
            "--margin-x",
            "2",
            "--margin-y",
            "3",
            "--spacing-x",
            "1",
            "--spacing-y",
            "1",
            "--out",
            "tiles",
            "--trim-empty",
            "--transparent-white",
        ]);

        let Command::Slice(args) = cli.command else {
            panic!("Expected the slice subcommand");
        };
        assert_eq!(args.tile_w, 32);
        assert_eq!(args.tile_h, 24);
        assert_eq!(args.margin_x, 2);
        assert_eq!(args.margin_y, 3);
        assert_eq!(args.spacing_x, 1);
        assert_eq!(args.spacing_y, 1);
        assert_eq!(args.out, Some(PathBuf::from("tiles")));
        assert!(args.trim_empty);
        assert!(args.transparent_white);
    }

    // Tests organize requires the config path
    // Verified by making --config optional
    #[test]
    fn test_organize_requires_config() {
        let result = Cli::try_parse_from(["tilebundle", "organize"]);
        assert!(result.is_err());

        let cli = Cli::parse_from(["tilebundle", "organize", "--config", "groups.json"]);
        let Command::Organize(args) = cli.command else {
            panic!("Expected the organize subcommand");
        };
        assert_eq!(args.config, PathBuf::from("groups.json"));
        assert!(args.out.is_none());
        assert!(!args.overwrite);
    }

    // Tests organize output and overwrite flags
    // Verified by inverting the overwrite default
    #[test]
    fn test_organize_out_and_overwrite() {
        let cli = Cli::parse_from([
            "tilebundle",
            "organize",
            "--config",
            "groups.json",
            "--out",
            "bundle",
            "--overwrite",
        ]);

        let Command::Organize(args) = cli.command else {
            panic!("Expected the organize subcommand");
        };
        assert_eq!(args.out, Some(PathBuf::from("bundle")));
        assert!(args.overwrite);
    }

    // Tests overview defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_overview_parse_defaults() {
        let cli = Cli::parse_from([
            "tilebundle",
            "overview",
            "--sliced-dir",
            "tiles",
            "--out",
            "overview.png",
        ]);

        let Command::Overview(args) = cli.command else {
            panic!("Expected the overview subcommand");
        };
        assert_eq!(args.sliced_dir, PathBuf::from("tiles"));
        assert_eq!(args.out, PathBuf::from("overview.png"));
        assert!(args.manifest.is_none());
        assert_eq!(args.scale, 8);
        assert_eq!(args.pad, 6);
        assert_eq!(args.label, LabelMode::IndexXy);
        assert_eq!(args.label_scale, 2);
    }

    // Tests every label mode spelling parses to its variant
    // Verified by renaming the enum variants
    #[test]
    fn test_overview_label_modes() {
        for (spelling, expected) in [
            ("none", LabelMode::None),
            ("index", LabelMode::Index),
            ("xy", LabelMode::Xy),
            ("index-xy", LabelMode::IndexXy),
        ] {
            let cli = Cli::parse_from([
                "tilebundle",
                "overview",
                "--sliced-dir",
                "tiles",
                "--out",
                "overview.png",
                "--label",
                spelling,
            ]);
            let Command::Overview(args) = cli.command else {
                panic!("Expected the overview subcommand");
            };
            assert_eq!(args.label, expected, "Spelling '{spelling}' mismatched");
        }
    }

    // Tests the global quiet flag works on either side of the subcommand
    // Verified by removing global = true
    #[test]
    fn test_quiet_flag_is_global() {
        let before = Cli::parse_from(["tilebundle", "--quiet", "slice", "sheet.png"]);
        assert!(before.quiet);
        assert!(!before.should_show_progress());

        let after = Cli::parse_from(["tilebundle", "slice", "sheet.png", "--quiet"]);
        assert!(after.quiet);

        let unset = Cli::parse_from(["tilebundle", "slice", "sheet.png"]);
        assert!(!unset.quiet);
        assert!(unset.should_show_progress());
    }

    // Tests an unknown subcommand is rejected
    // Verified by accepting arbitrary external subcommands
    #[test]
    fn test_unknown_subcommand() {
        let result = Cli::try_parse_from(["tilebundle", "shuffle"]);
        assert!(result.is_err());
    }
}
