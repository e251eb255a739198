//! Search center template: homepage/discovery pattern
//!
//! Large centered search input with keyboard shortcut hint, plus recent
//! searches and suggested content cards for the zero state.

/// Entry point: imports the view and passes the page title through.
pub const PAGE_TSX: &str = r#"import { {{component_name}}View } from './view'

/*
 * ===========================================
 * {{title_upper}} - SEARCH CENTER
 * ===========================================
 */

export default function {{component_name}}Page() {
  return <{{component_name}}View title="{{title}}" />
}
"#;

/// Client view: search bar plus recent/suggested cards.
pub const VIEW_TSX: &str = r#"'use client'

import { Stack, Text, Card, Input, Badge } from '@/components/ui'
import { Search, Clock, TrendingUp } from 'lucide-react'

export function {{component_name}}View({ title }: { title: string }) {
  return (
    <div className="max-w-4xl mx-auto px-6 py-20">
      <Stack spacing="xl" align="center">

        {/* Header */}
        <Stack spacing="sm" align="center" className="text-center">
          <Text variant="headline-1">{title}</Text>
          <Text variant="body-1" color="secondary" className="max-w-lg">
            Find assets, folders, and campaigns across your organization.
          </Text>
        </Stack>

        {/* Search Bar */}
        <div className="w-full max-w-2xl relative">
          <div className="absolute inset-y-0 left-4 flex items-center pointer-events-none">
            <Search className="h-6 w-6 text-foreground-dim" />
          </div>
          <input
            type="text"
            className="w-full h-16 pl-14 pr-12 rounded-2xl border border-border-subtle bg-surface-0 shadow-lg text-lg focus:outline-none focus:ring-2 focus:ring-primary/20 transition-all placeholder:text-foreground-subtle"
            placeholder="Search everything..."
            autoFocus
          />
          <div className="absolute inset-y-0 right-4 flex items-center pointer-events-none">
            <kbd className="hidden sm:inline-flex h-6 items-center gap-1 rounded border border-border-subtle bg-surface-2 px-2 font-mono text-[10px] font-medium text-foreground-dim">
              <span className="text-xs">⌘</span>K
            </kbd>
          </div>
        </div>

        {/* Quick Links / Recents */}
        <div className="w-full max-w-2xl grid grid-cols-1 md:grid-cols-2 gap-6">
          <Card padding="md" variant="outlined">
            <Stack spacing="md">
              <Stack direction="horizontal" spacing="sm" align="center">
                <Clock className="w-4 h-4 text-foreground-dim" />
                <Text variant="body-2" weight="medium" color="secondary">Recent Searches</Text>
              </Stack>
              <div className="flex flex-wrap gap-2">
                <Badge color="gray" compact className="cursor-pointer hover:bg-surface-highlight">campaign_q4</Badge>
                <Badge color="gray" compact className="cursor-pointer hover:bg-surface-highlight">logo_final</Badge>
                <Badge color="gray" compact className="cursor-pointer hover:bg-surface-highlight">marketing video</Badge>
              </div>
            </Stack>
          </Card>

          <Card padding="md" variant="outlined">
             <Stack spacing="md">
              <Stack direction="horizontal" spacing="sm" align="center">
                <TrendingUp className="w-4 h-4 text-foreground-dim" />
                <Text variant="body-2" weight="medium" color="secondary">Suggested</Text>
              </Stack>
              <Stack spacing="sm">
                <div className="flex justify-between text-sm group cursor-pointer">
                  <span>Q4 Brand Guidelines</span>
                  <span className="text-foreground-subtle group-hover:text-primary transition-colors">PDF</span>
                </div>
                <div className="flex justify-between text-sm group cursor-pointer">
                  <span>Social Media Templates</span>
                  <span className="text-foreground-subtle group-hover:text-primary transition-colors">Folder</span>
                </div>
              </Stack>
            </Stack>
          </Card>
        </div>

      </Stack>
    </div>
  )
}
"#;
