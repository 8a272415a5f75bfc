pub fn orthogonal_neighbors(
    (x, y): (i32, i32),
    (tl_x, tl_y): (i32, i32),
    (br_x, br_y): (i32, i32),
) -> Vec<(i32, i32)> {
    let mut v = Vec::new();

    if y > tl_y {
        v.push((x, y - 1));
    }

    if y < br_y {
        v.push((x, y + 1));
    }

    if x > tl_x {
        v.push((x - 1, y));
    }

    if x < br_x {
        v.push((x + 1, y));
    }

    v
}

pub fn offset((x, y): (i32, i32), (dx, dy): (i32, i32)) -> (i32, i32) {
    (x + dx, y + dy)
}
