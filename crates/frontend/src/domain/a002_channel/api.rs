use contracts::domain::a002_channel::{Channel, ChannelList};

use crate::shared::api_utils::{get_data, ApiError};

/// Channels in server order
pub async fn fetch_channels(token: Option<&str>) -> Result<Vec<Channel>, ApiError> {
    let list: ChannelList = get_data("/channels", token).await?;
    Ok(list.channels)
}
