<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Auto-tag action button</description>
   <name>btn_AutoTag</name>
   <tag></tag>
   <elementGuidId>review-autotag-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Auto-tag') or contains(text(), 'Auto Tag') or @aria-label='Auto-tag']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='autotag-button']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
