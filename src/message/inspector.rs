use std::fmt::Display;

use crate::message::{
    HeaderMsg,
    MultiArrayDimensionMsg,
    MultiArrayLayoutMsg,
    Point32Msg,
    PointCloudMsg,
    PointMsg,
    PointStampedMsg,
    QuaternionMsg,
    QuaternionStampedMsg,
    TransformMsg,
    UInt16MultiArrayMsg,
    Vector3Msg,
    Vector3StampedMsg,
};


pub const DEFAULT_TABULATE: bool = true;


/// Human-readable dump of a message's fields, one line per row.
pub trait FieldInspector {
    fn inspect(&self) -> Vec<String>;
}


fn xyz(x: impl Display, y: impl Display, z: impl Display) -> String {
    format!("x: {x:.3}  y: {y:.3}  z: {z:.3}")
}

impl FieldInspector for HeaderMsg {
    fn inspect(&self) -> Vec<String> {
        vec![
            format!("frame_id: {}", self.frame_id),
            format!("stamp: {}.{:09}", self.stamp.sec, self.stamp.nanosec),
        ]
    }
}

impl FieldInspector for Vector3Msg {
    fn inspect(&self) -> Vec<String> {
        vec![xyz(self.x, self.y, self.z)]
    }
}

impl FieldInspector for PointMsg {
    fn inspect(&self) -> Vec<String> {
        vec![xyz(self.x, self.y, self.z)]
    }
}

impl FieldInspector for Point32Msg {
    fn inspect(&self) -> Vec<String> {
        vec![xyz(self.x, self.y, self.z)]
    }
}

impl FieldInspector for QuaternionMsg {
    fn inspect(&self) -> Vec<String> {
        vec![format!(
            "x: {:.3}  y: {:.3}  z: {:.3}  w: {:.3}",
            self.x,
            self.y,
            self.z,
            self.w,
        )]
    }
}

impl FieldInspector for TransformMsg {
    fn inspect(&self) -> Vec<String> {
        let mut lines = vec!["translation".to_string()];
        lines.extend(self.translation.inspect());
        lines.push("rotation".to_string());
        lines.extend(self.rotation.inspect());
        lines
    }
}

impl FieldInspector for Vector3StampedMsg {
    fn inspect(&self) -> Vec<String> {
        let mut lines = self.header.inspect();
        lines.extend(self.vector.inspect());
        lines
    }
}

impl FieldInspector for PointStampedMsg {
    fn inspect(&self) -> Vec<String> {
        let mut lines = self.header.inspect();
        lines.extend(self.point.inspect());
        lines
    }
}

impl FieldInspector for QuaternionStampedMsg {
    fn inspect(&self) -> Vec<String> {
        let mut lines = self.header.inspect();
        lines.extend(self.quaternion.inspect());
        lines
    }
}

impl FieldInspector for PointCloudMsg {
    fn inspect(&self) -> Vec<String> {
        let mut lines = self.header.inspect();
        lines.push(format!("points: {}", self.points.len()));
        lines
    }
}

impl FieldInspector for UInt16MultiArrayMsg {
    fn inspect(&self) -> Vec<String> {
        self.inspect_tabulated(DEFAULT_TABULATE)
    }
}

impl UInt16MultiArrayMsg {
    pub fn inspect_tabulated(&self, tabulate: bool) -> Vec<String> {
        inspect_multi_array(&self.layout, &self.data, tabulate)
    }
}


/// Dump multi-array data. With `tabulate` set and a two-dimensional layout,
/// each row of the outer dimension becomes one tab-separated line; anything
/// else, or a layout pointing past the data, prints as a flat list.
pub fn inspect_multi_array<T: Display>(
    layout: &MultiArrayLayoutMsg,
    data: &[T],
    tabulate: bool,
) -> Vec<String> {
    let mut lines: Vec<String> = layout.dim
        .iter()
        .map(|dim| format!("{}: size {} stride {}", dim.label, dim.size, dim.stride))
        .collect();

    let offset = layout.data_offset as usize;

    let table = match layout.dim.as_slice() {
        [rows, columns] if tabulate => tabulate_rows(rows, columns, offset, data),
        _ => Vec::new(),
    };

    if table.is_empty() {
        lines.push(flat_list(data, offset));
    } else {
        lines.extend(table);
    }

    lines
}

// never emits more rows than there are values
fn tabulate_rows<T: Display>(
    rows: &MultiArrayDimensionMsg,
    columns: &MultiArrayDimensionMsg,
    offset: usize,
    data: &[T],
) -> Vec<String> {
    let row_count = (rows.size as usize).min(data.len());
    let mut table = Vec::with_capacity(row_count);

    for row in 0..row_count {
        let start = row
            .checked_mul(columns.stride as usize)
            .and_then(|start| start.checked_add(offset));

        let Some(start) = start.filter(|&start| start < data.len()) else {
            break;
        };
        let end = start.saturating_add(columns.size as usize).min(data.len());

        let cells: Vec<String> = data[start..end]
            .iter()
            .map(|value| value.to_string())
            .collect();

        table.push(cells.join("\t"));
    }

    table
}

fn flat_list<T: Display>(data: &[T], offset: usize) -> String {
    let values: Vec<String> = data
        .iter()
        .skip(offset)
        .map(|value| value.to_string())
        .collect();

    format!("[{}]", values.join(", "))
}
