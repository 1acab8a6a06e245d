use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Body sections, top to bottom: counter label, two button rows, input
/// label, input box, echo line.
pub struct BodyRegions {
    pub count: Rect,
    pub button_rows: [Rect; 2],
    pub input_label: Rect,
    pub input: Rect,
    pub echo: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);

    BodyRegions {
        count: chunks[1],
        button_rows: [chunks[2], chunks[3]],
        input_label: chunks[5],
        input: chunks[6],
        echo: chunks[7],
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let area = Rect::new(0, 0, 10, 2);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
