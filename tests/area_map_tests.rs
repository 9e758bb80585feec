use crsmap::prelude::*;

/// The map widget as a CRS page sets it up
#[cfg(test)]
mod area_map_tests {
    use super::*;

    #[test]
    fn test_record_area_to_map() {
        let record: CrsRecord = serde_json::from_str(
            r#"{
                "auth_name": "EPSG",
                "code": "3994",
                "name": "WGS 84 / Mercator 41",
                "area_of_use": {"west": 143.83, "south": -60.22, "east": -155.85, "north": -25.94}
            }"#,
        )
        .unwrap();

        let area = record.area_of_use.unwrap();
        let map = MapView::for_area(&area, &SiteConfig::default());
        let rectangle = map.rectangle().unwrap();

        // |143.83| < |-155.85|: the east edge moves past 180
        assert_eq!(rectangle.corners()[0], [-60.22, 143.83]);
        assert!((rectangle.corners()[1][1] - 204.15).abs() < 1e-9);
        assert!(map.center.lng > 170.0 && map.center.lng < 180.0);
        assert!(map.zoom >= 1.0);
    }

    #[test]
    fn test_custom_color_and_tiles() {
        let config = SiteConfig {
            rectangle_color: "#d33".to_string(),
            ..SiteConfig::default()
        };
        let map = MapView::for_area(&AreaOfUse::new(5.0, 45.0, 11.0, 48.0), &config);

        assert_eq!(map.rectangle().unwrap().style.color, "#d33");
        let tiles = map.visible_tiles();
        assert!(!tiles.is_empty());
        assert!(map
            .tile_layer()
            .tile_url(tiles[0])
            .starts_with("https://tile.openstreetmap.org/"));
    }

    #[test]
    fn test_ordered_areas_pass_through() {
        for area in [
            [-170.0, -10.0, 170.0, 10.0],
            [2.5, 49.5, 6.4, 51.5],
            [-180.0, -90.0, 180.0, 90.0],
        ] {
            let bounds = normalize(&AreaOfUse::from(area));
            assert_eq!(bounds.corners(), [[area[1], area[0]], [area[3], area[2]]]);
        }
    }
}
