use texture_prep::config::{FormatSet, TextureKind};
use texture_prep::discovery::{FORMAT_RULES, classify_with_rules};

fn classify_texture(name: &str) -> TextureKind {
    classify_with_rules(&name.to_lowercase(), &FORMAT_RULES)
}

fn select_format<'a>(name: &str, formats: &'a FormatSet) -> &'a str {
    formats.format_for(classify_texture(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_maps() {
        let formats = FormatSet::default();

        for name in ["wall_normal.png", "Wall_Normal.JPG", "NORMALmap.png", "a_normal_hdr_ao.jpg"] {
            assert_eq!(classify_texture(name), TextureKind::Normal, "{name}");
            assert_eq!(select_format(name, &formats), formats.normal);
        }
    }

    #[test]
    fn test_metal_rough_shares_the_normal_format() {
        // Pinned current behaviour: metal/rough maps use the normal map format
        // rather than a dedicated one.
        let formats = FormatSet {
            normal: "NORMAL_FMT".to_string(),
            ..FormatSet::default()
        };

        for name in ["roof_metal_rough.jpg", "ROUGH_METAL.png", "metalroughness.png", "x_rough_y_metal_hdr.png"] {
            assert_eq!(classify_texture(name), TextureKind::Normal, "{name}");
            assert_eq!(select_format(name, &formats), "NORMAL_FMT");
        }
    }

    #[test]
    fn test_metal_or_rough_alone_is_not_enough() {
        assert_eq!(classify_texture("roof_metal.png"), TextureKind::Default);
        assert_eq!(classify_texture("roof_rough.png"), TextureKind::Default);
    }

    #[test]
    fn test_hdr() {
        let formats = FormatSet::default();

        for name in ["sky_hdr.png", "SkyHDR.jpg", "hdr_ao.png"] {
            assert_eq!(classify_texture(name), TextureKind::Hdr, "{name}");
            assert_eq!(select_format(name, &formats), "BC6H_UF16");
        }
    }

    #[test]
    fn test_ambient_occlusion() {
        let formats = FormatSet::default();

        for name in ["rock_ao.png", "Rock_AO.jpg", "metal_ao.png"] {
            assert_eq!(classify_texture(name), TextureKind::AmbientOcclusion, "{name}");
            assert_eq!(select_format(name, &formats), "BC4_UNORM");
        }
    }

    #[test]
    fn test_default() {
        let formats = FormatSet::default();

        for name in ["albedo.png", "brick_diffuse.jpg", "emissive.png"] {
            assert_eq!(classify_texture(name), TextureKind::Default, "{name}");
            assert_eq!(select_format(name, &formats), "BC7_UNORM");
        }
    }
}
