//! Queries over the `lines` table.

use std::cmp::Ordering;

use scriptline_core::error::CoreError;
use scriptline_core::search::{Page, TextFilter};
use scriptline_core::sort::LineSort;
use scriptline_core::types::DbId;

use crate::dataset::Dataset;
use crate::models::line::{Line, LineDetail, LineListParams};

/// Provides lookup and filtered listing for lines.
pub struct LineRepo;

impl LineRepo {
    /// Find a line by id.
    pub fn find_by_id(data: &Dataset, id: DbId) -> Option<&Line> {
        data.line(id)
    }

    /// Build the detail view of a line with its movie title and speaker.
    pub fn detail(data: &Dataset, id: DbId) -> Result<LineDetail, CoreError> {
        Self::find_by_id(data, id)
            .map(|line| view(data, line))
            .ok_or(CoreError::NotFound { entity: "Line", id })
    }

    /// List lines matching every given filter, sorted and paginated.
    pub fn list(data: &Dataset, params: &LineListParams, page: Page) -> Vec<LineDetail> {
        let speaker = TextFilter::new(params.character.as_deref());
        let text = TextFilter::new(params.text.as_deref());

        let mut items: Vec<LineDetail> = data
            .lines()
            .filter(|l| params.movie_id.map_or(true, |id| l.movie_id == id))
            .filter(|l| params.conversation_id.map_or(true, |id| l.conversation_id == id))
            .filter(|l| text.matches(&l.line_text))
            .filter(|l| speaker.matches(data.character_name(l.character_id)))
            .map(|l| view(data, l))
            .collect();

        items.sort_by(|a, b| compare(params.sort, a, b));
        page.apply(items)
    }
}

fn view(data: &Dataset, line: &Line) -> LineDetail {
    LineDetail {
        line_id: line.id,
        movie_title: data.movie_title(line.movie_id).to_string(),
        conversation_id: line.conversation_id,
        line_sort: line.line_sort,
        character: data.character_name(line.character_id).to_string(),
        line_text: line.line_text.clone(),
    }
}

fn compare(sort: LineSort, a: &LineDetail, b: &LineDetail) -> Ordering {
    let as_spoken = || {
        a.conversation_id
            .cmp(&b.conversation_id)
            .then_with(|| a.line_sort.cmp(&b.line_sort))
            .then_with(|| a.line_id.cmp(&b.line_id))
    };
    match sort {
        LineSort::Conversation => as_spoken(),
        LineSort::Character => a
            .character
            .cmp(&b.character)
            .then_with(|| a.line_id.cmp(&b.line_id)),
        LineSort::MovieTitle => a.movie_title.cmp(&b.movie_title).then_with(as_spoken),
    }
}
