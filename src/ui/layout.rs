use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

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

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Sections of the home page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub hero: Rect,
    pub services: Rect,
    pub portfolio: Rect,
    pub testimonials: Rect,
}

pub fn home_layout(body: Rect) -> HomeLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(6),
            Constraint::Length(7),
        ])
        .split(body);
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    HomeLayout {
        hero: rows[0],
        services: middle[0],
        portfolio: middle[1],
        testimonials: rows[2],
    }
}

/// Clickable prev/next arrows and one dot per slide, on the last inner row
/// of a bordered carousel block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselControls {
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlHit {
    Prev,
    Next,
    Dot(usize),
}

pub fn carousel_controls(area: Rect, slides: usize) -> Option<CarouselControls> {
    // Two border rows plus at least one content row above the controls
    if area.height < 4 {
        return None;
    }
    // "◀ " + "● " per slide + "▶"
    let width = (3 + slides * 2) as u16;
    if area.width < width + 2 {
        return None;
    }
    let y = area.y + area.height - 2;
    let x = area.x + (area.width - width) / 2;
    let cell = |x: u16| Rect {
        x,
        y,
        width: 1,
        height: 1,
    };
    Some(CarouselControls {
        prev: cell(x),
        dots: (0..slides).map(|i| cell(x + 2 + i as u16 * 2)).collect(),
        next: cell(x + 2 + slides as u16 * 2),
    })
}

impl CarouselControls {
    pub fn hit(&self, column: u16, row: u16) -> Option<ControlHit> {
        let pos = Position::new(column, row);
        if self.prev.contains(pos) {
            return Some(ControlHit::Prev);
        }
        if self.next.contains(pos) {
            return Some(ControlHit::Next);
        }
        self.dots
            .iter()
            .position(|dot| dot.contains(pos))
            .map(ControlHit::Dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn controls_are_centered_on_last_inner_row() {
        let controls = carousel_controls(Rect::new(0, 0, 40, 8), 4).unwrap();
        assert_eq!(controls.prev.y, 6);
        assert_eq!(controls.dots.len(), 4);
        assert_eq!(controls.hit(controls.dots[2].x, 6), Some(ControlHit::Dot(2)));
        assert_eq!(controls.hit(controls.next.x, 6), Some(ControlHit::Next));
        assert_eq!(controls.hit(controls.prev.x + 1, 6), None);
    }

    #[test]
    fn controls_need_room() {
        assert!(carousel_controls(Rect::new(0, 0, 8, 8), 4).is_none());
        assert!(carousel_controls(Rect::new(0, 0, 40, 3), 4).is_none());
    }
}
