// Layout math for the ingredients grid and the header photo.

use crate::ui_constants::INGREDIENT_SLOT_WIDTH;

/// Number of ingredient tiles per row for a given screen width.
/// Never returns 0, so narrow windows fall back to a single column.
pub fn items_per_row(screen_width: f32) -> usize {
    let n = (screen_width / INGREDIENT_SLOT_WIDTH).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Split `items` into consecutive rows of `per_row`; the last row may be shorter.
pub fn chunk_rows<T>(items: &[T], per_row: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(per_row.max(1))
}

/// Gap between items when a row is laid out "space between":
/// first item flush left, last flush right. A single item gets no gap.
pub fn space_between_gap(row_width: f32, item_width: f32, count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }
    let free = row_width - item_width * count as f32;
    (free / (count - 1) as f32).max(0.0)
}

/// UV rectangle (min_u, min_v, max_u, max_v) that center-crops an image of
/// `image_size` so it fills `target_size` without distortion.
pub fn center_crop_uv(image_size: [f32; 2], target_size: [f32; 2]) -> [f32; 4] {
    let [iw, ih] = image_size;
    let [tw, th] = target_size;
    if iw <= 0.0 || ih <= 0.0 || tw <= 0.0 || th <= 0.0 {
        return [0.0, 0.0, 1.0, 1.0];
    }
    let image_aspect = iw / ih;
    let target_aspect = tw / th;
    if image_aspect > target_aspect {
        // Too wide: trim left and right.
        let visible = target_aspect / image_aspect;
        let m = (1.0 - visible) / 2.0;
        [m, 0.0, 1.0 - m, 1.0]
    } else {
        let visible = image_aspect / target_aspect;
        let m = (1.0 - visible) / 2.0;
        [0.0, m, 1.0, 1.0 - m]
    }
}

/// Size of an image of `image_size` scaled to fit inside `target_size`
/// while keeping its aspect ratio. The image is never cut.
pub fn fit_size(image_size: [f32; 2], target_size: [f32; 2]) -> [f32; 2] {
    let [iw, ih] = image_size;
    let [tw, th] = target_size;
    if iw <= 0.0 || ih <= 0.0 {
        return target_size;
    }
    let scale = (tw / iw).min(th / ih).max(0.0);
    [iw * scale, ih * scale]
}
