//! Query definitions.

use super::{ParamKind, QueryDef, Tab};

/// Every canned query, grouped by owning tab.
pub static CATALOG: &[QueryDef] = &[
    // Metadata
    QueryDef {
        name: "byzantine-11th-century",
        title: "11th Century Byzantine Artifacts",
        tab: Tab::Metadata,
        sql: r#"
            SELECT * FROM artifact_metadata
            WHERE century = '11th century' AND culture = 'Byzantine'
        "#,
        param: None,
    },
    QueryDef {
        name: "unique-cultures",
        title: "Unique Cultures",
        tab: Tab::Metadata,
        sql: r#"
            SELECT DISTINCT culture FROM artifact_metadata
            WHERE culture IS NOT NULL AND TRIM(culture) != ''
            ORDER BY culture
        "#,
        param: None,
    },
    QueryDef {
        name: "archaic-period",
        title: "Archaic Period Artifacts",
        tab: Tab::Metadata,
        sql: r#"
            SELECT * FROM artifact_metadata
            WHERE period = 'Archaic'
        "#,
        param: None,
    },
    QueryDef {
        name: "titles-by-accession-year",
        title: "Artifact Titles by Accession Year",
        tab: Tab::Metadata,
        sql: r#"
            SELECT title, accessionyear FROM artifact_metadata
            WHERE accessionyear IS NOT NULL
            ORDER BY accessionyear DESC
        "#,
        param: None,
    },
    QueryDef {
        name: "artifacts-per-department",
        title: "Artifacts per Department",
        tab: Tab::Metadata,
        sql: r#"
            SELECT department, COUNT(*) AS artifact_count
            FROM artifact_metadata
            WHERE department IS NOT NULL AND TRIM(department) != ''
            GROUP BY department
            ORDER BY artifact_count DESC
        "#,
        param: None,
    },
    // Media
    QueryDef {
        name: "multiple-images",
        title: "Artifacts with Multiple Images",
        tab: Tab::Media,
        sql: r#"
            SELECT objectid, COUNT(*) AS image_count
            FROM artifact_media
            GROUP BY objectid
            HAVING COUNT(*) > 1
            ORDER BY image_count DESC
        "#,
        param: None,
    },
    QueryDef {
        name: "average-rank",
        title: "Average Rank of Artifacts",
        tab: Tab::Media,
        sql: "SELECT AVG(rank) AS average_rank FROM artifact_media",
        param: None,
    },
    QueryDef {
        name: "colorcount-exceeds-mediacount",
        title: "Artifacts with Colorcount > Mediacount",
        tab: Tab::Media,
        sql: r#"
            SELECT objectid, colorcount, mediacount
            FROM artifact_media
            WHERE colorcount > mediacount
        "#,
        param: None,
    },
    QueryDef {
        name: "media-1500-1600",
        title: "Artifacts Created Between 1500-1600",
        tab: Tab::Media,
        sql: r#"
            SELECT * FROM artifact_media
            WHERE datebegin <= 1600 AND dateend >= 1500
        "#,
        param: None,
    },
    QueryDef {
        name: "artifacts-without-media",
        title: "Artifacts with No Media Files",
        tab: Tab::Media,
        sql: r#"
            SELECT meta.id, meta.title
            FROM artifact_metadata meta
            LEFT JOIN artifact_media media ON meta.id = media.objectid
            WHERE media.objectid IS NULL
        "#,
        param: None,
    },
    // Colors
    QueryDef {
        name: "distinct-hues",
        title: "Distinct Hues",
        tab: Tab::Colors,
        sql: r#"
            SELECT DISTINCT hue FROM artifact_colors
            WHERE hue IS NOT NULL AND TRIM(hue) != ''
            ORDER BY hue
        "#,
        param: None,
    },
    QueryDef {
        name: "top-5-hues",
        title: "Top 5 Most Used Colors",
        tab: Tab::Colors,
        sql: r#"
            SELECT hue, COUNT(*) AS frequency
            FROM artifact_colors
            WHERE hue IS NOT NULL AND TRIM(hue) != ''
            GROUP BY hue
            ORDER BY frequency DESC
            LIMIT 5
        "#,
        param: None,
    },
    QueryDef {
        name: "average-coverage-by-hue",
        title: "Average Coverage by Hue",
        tab: Tab::Colors,
        sql: r#"
            SELECT hue, AVG(percent) AS avg_coverage
            FROM artifact_colors
            WHERE hue IS NOT NULL AND TRIM(hue) != ''
            GROUP BY hue
            ORDER BY avg_coverage DESC
        "#,
        param: None,
    },
    QueryDef {
        name: "colors-for-artifact",
        title: "Colors for a Specific Artifact",
        tab: Tab::Colors,
        sql: r#"
            SELECT * FROM artifact_colors
            WHERE objectid = ?1
            ORDER BY percent DESC
        "#,
        param: Some(ParamKind::ArtifactId),
    },
    QueryDef {
        name: "total-color-entries",
        title: "Total Color Entries",
        tab: Tab::Colors,
        sql: "SELECT COUNT(*) AS total_entries FROM artifact_colors",
        param: None,
    },
    // Joins
    QueryDef {
        name: "byzantine-hues",
        title: "Byzantine Artifacts with Hues",
        tab: Tab::Joins,
        sql: r#"
            SELECT meta.title, colors.hue
            FROM artifact_metadata meta
            JOIN artifact_colors colors ON meta.id = colors.objectid
            WHERE meta.culture = 'Byzantine'
            ORDER BY meta.title, colors.hue
        "#,
        param: None,
    },
    QueryDef {
        name: "artifact-hues",
        title: "All Artifacts with Associated Hues",
        tab: Tab::Joins,
        sql: r#"
            SELECT meta.title, colors.hue
            FROM artifact_metadata meta
            JOIN artifact_colors colors ON meta.id = colors.objectid
            WHERE colors.hue IS NOT NULL AND TRIM(colors.hue) != ''
            ORDER BY meta.title, colors.hue
        "#,
        param: None,
    },
    QueryDef {
        name: "period-media-ranks",
        title: "Artifacts with Period Data and Media Ranks",
        tab: Tab::Joins,
        sql: r#"
            SELECT meta.title, meta.culture, media.rank
            FROM artifact_metadata meta
            JOIN artifact_media media ON meta.id = media.objectid
            WHERE meta.period IS NOT NULL AND TRIM(meta.period) != ''
            ORDER BY media.rank DESC
            LIMIT 500
        "#,
        param: None,
    },
    QueryDef {
        name: "top-10-grey",
        title: "Top 10 Ranked Artifacts with Hue 'Grey'",
        tab: Tab::Joins,
        sql: r#"
            SELECT meta.title, media.rank, colors.hue
            FROM artifact_metadata meta
            JOIN artifact_media media ON meta.id = media.objectid
            JOIN artifact_colors colors ON meta.id = colors.objectid
            WHERE colors.hue = 'Grey'
            ORDER BY media.rank ASC
            LIMIT 10
        "#,
        param: None,
    },
    QueryDef {
        name: "classification-media-stats",
        title: "Artifacts per Classification with Average Media Count",
        tab: Tab::Joins,
        sql: r#"
            SELECT
                meta.classification,
                COUNT(*) AS artifact_count,
                AVG(media.mediacount) AS avg_media_count
            FROM artifact_metadata meta
            JOIN artifact_media media ON meta.id = media.objectid
            WHERE meta.classification IS NOT NULL AND TRIM(meta.classification) != ''
            GROUP BY meta.classification
            ORDER BY artifact_count DESC
        "#,
        param: None,
    },
    // Classification explorer
    QueryDef {
        name: "artifacts-1500-1600",
        title: "Artifacts from 1500-1600",
        tab: Tab::Classification,
        sql: r#"
            SELECT meta.title, media.datebegin, media.dateend
            FROM artifact_metadata meta
            JOIN artifact_media media ON meta.id = media.objectid
            WHERE media.datebegin <= 1600 AND media.dateend >= 1500
        "#,
        param: None,
    },
    QueryDef {
        name: "ingested-per-classification",
        title: "Ingested Records per Classification",
        tab: Tab::Classification,
        sql: r#"
            SELECT classification, COUNT(*) AS record_count
            FROM artifact_classification
            GROUP BY classification
            ORDER BY record_count DESC
        "#,
        param: None,
    },
];
